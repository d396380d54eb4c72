use serde::Serialize;
use std::{
    io::{self, Write},
    iter::once,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::{buttons::LogicalIndex, module::DisplayPayload};

/// Where the control glyphs are placed relative to the text
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonsControl {
    Left,
    Right,
    #[default]
    None,
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub buttons: ButtonsControl,
    pub button_color: String,
    /// Escape `<`, `>` and `&` for bars that render pango markup
    pub escape_markup: bool,
}

/// One clickable segment of the module
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    full_text: String,
    color: String,
    index: LogicalIndex,
}
impl Block {
    fn new(text: &str, color: String, index: LogicalIndex, escape_markup: bool) -> Self {
        let full_text = if escape_markup {
            html_escape::encode_text(text).into_owned()
        } else {
            text.to_owned()
        };
        Self {
            full_text,
            color,
            index,
        }
    }
}

/// A structure that can be serialized to JSON and parsed by the bar.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Unix time in seconds until which the bar may keep showing this response
    cached_until: u64,
    composite: Vec<Block>,
}

impl Response {
    /// Lay out the text block and the control glyphs.
    #[must_use]
    pub fn new(cached_until: u64, payload: DisplayPayload, layout: &Layout) -> Self {
        let text = Block::new(
            &payload.text,
            payload.color,
            LogicalIndex::Text,
            layout.escape_markup,
        );
        let buttons = payload.controls.into_iter().map(|c| {
            Block::new(
                &format!(" {} ", c.glyph),
                layout.button_color.clone(),
                c.index,
                layout.escape_markup,
            )
        });
        let composite = match layout.buttons {
            ButtonsControl::Left => buttons.chain(once(text)).collect(),
            ButtonsControl::Right => once(text).chain(buttons).collect(),
            ButtonsControl::None => vec![text],
        };
        Self {
            cached_until,
            composite,
        }
    }

    /// Format the response as JSON and write it to the given writer.
    ///
    /// # Errors
    ///
    /// This function will return an error if writing to the given writer fails.
    pub fn format<T: Write>(&self, mut f: &mut T) -> io::Result<()> {
        serde_json::to_writer(&mut f, self)?;
        f.write_all(b"\n")?;
        f.flush()
    }

    /// Print the response to stdout.
    ///
    /// # Errors
    ///
    /// This function will return an error if writing to stdout fails.
    pub fn print(&self) -> io::Result<()> {
        self.format(&mut io::stdout().lock())
    }
}

/// Unix timestamp one refresh interval from now
#[must_use]
pub fn cached_until(interval: Duration) -> u64 {
    (SystemTime::now() + interval)
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
