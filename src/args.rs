use std::{fs::File, io, sync::Mutex, time::Duration};

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    buttons::ButtonRenderer,
    command::{Binding, ButtonBindings, CommandRouter},
    format::TextFormatter,
    module::Module,
    output::{ButtonsControl, Layout},
    priority::PriorityList,
    state::{Glyphs, Palette, StateClassifier, StateColors},
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Refresh every X seconds
    #[clap(long, short, default_value_t = 5.0)]
    pub interval: f64,
    /// File to write the log to. If not specified, logs will be written to stderr.
    #[clap(long, short)]
    log_file: Option<String>,

    /// Mouse button on the text that toggles between play and pause ("none" to disable)
    #[clap(long, default_value = "1")]
    button_play: Binding,
    /// Mouse button on the text that stops the player ("none" to disable)
    #[clap(long, default_value = "none")]
    button_stop: Binding,
    /// Mouse button on the text that plays the next entry ("none" to disable)
    #[clap(long, default_value = "4")]
    button_next: Binding,
    /// Mouse button on the text that plays the previous entry ("none" to disable)
    #[clap(long, default_value = "5")]
    button_previous: Binding,
    /// Where to show the control buttons
    #[clap(long, value_enum, default_value_t = ButtonsControl::None)]
    buttons_control: ButtonsControl,
    /// Order of the control buttons, any of play, stop, next and previous
    #[clap(long, value_delimiter = ',', default_value = "previous,play,next")]
    buttons_order: Vec<String>,

    /// Text color when playing. Defaults to --color-good
    #[clap(long)]
    color_playing: Option<String>,
    /// Text color when paused. Defaults to --color-degraded
    #[clap(long)]
    color_paused: Option<String>,
    /// Text color when stopped. Defaults to --color-bad
    #[clap(long)]
    color_stopped: Option<String>,
    #[clap(long, default_value = "#00FF00")]
    color_good: String,
    #[clap(long, default_value = "#FFFF00")]
    color_degraded: String,
    /// Also used when no player is running or the player fails to answer
    #[clap(long, default_value = "#FF0000")]
    color_bad: String,
    #[clap(long, default_value = "#CCCCCC")]
    color_buttons: String,

    /// Format of the text. Placeholders: {album} {artist} {length} {player} {state} {time} {title}
    #[clap(long, default_value = "{state} {artist} - {title}")]
    format: String,
    /// Format used for streams, videos and media files without artist information
    #[clap(long, default_value = "{state} {title}")]
    format_stream: String,
    /// Text shown when no player is running
    #[clap(long, default_value = "no player running")]
    format_none: String,

    #[clap(long, default_value = "▶")]
    state_play: String,
    #[clap(long, default_value = "▮▮")]
    state_pause: String,
    #[clap(long, default_value = "◾")]
    state_stop: String,
    #[clap(long, default_value = "»")]
    state_next: String,
    #[clap(long, default_value = "«")]
    state_previous: String,

    /// Comma separated player names, highest priority first. "*" stands for all other players.
    /// Players that are playing win over paused ones, which win over stopped ones.
    /// If not specified, all players are considered in bus order.
    #[clap(long, short)]
    player_priority: Option<PriorityList>,
    /// Escape the text for bars that render pango markup
    #[clap(long)]
    escape_markup: bool,
}

impl Args {
    /// Build the tracing subscriber using parameters from the command line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created.
    pub fn init_tracing_subscriber(&self) -> Result<()> {
        let builder = tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env());

        match self.log_file.as_ref() {
            None => builder.with_writer(io::stderr).init(),
            Some(f) => builder
                .with_writer(Mutex::new(
                    File::create(f).with_context(|| format!("Failed to create log file {f}"))?,
                ))
                .init(),
        }
        Ok(())
    }

    /// Assemble the module from the parsed configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh interval is not a positive number of seconds.
    pub fn into_module(self) -> Result<Module> {
        let interval = Duration::try_from_secs_f64(self.interval)
            .ok()
            .filter(|d| !d.is_zero())
            .with_context(|| format!("Invalid refresh interval {}", self.interval))?;
        Ok(Module {
            interval,
            priority: self.player_priority,
            classifier: StateClassifier {
                glyphs: Glyphs {
                    play: self.state_play,
                    pause: self.state_pause,
                    stop: self.state_stop,
                    next: self.state_next,
                    previous: self.state_previous,
                },
                colors: StateColors {
                    playing: self.color_playing,
                    paused: self.color_paused,
                    stopped: self.color_stopped,
                },
                palette: Palette {
                    good: self.color_good,
                    degraded: self.color_degraded,
                    bad: self.color_bad,
                },
            },
            formatter: TextFormatter {
                track: self.format,
                stream: self.format_stream,
            },
            format_none: self.format_none,
            buttons: ButtonRenderer::new(&self.buttons_order),
            router: CommandRouter {
                bindings: ButtonBindings {
                    play: self.button_play,
                    stop: self.button_stop,
                    next: self.button_next,
                    previous: self.button_previous,
                },
            },
            layout: Layout {
                buttons: self.buttons_control,
                button_color: self.color_buttons,
                escape_markup: self.escape_markup,
            },
        })
    }
}
