//! Clickable control glyphs next to the status text

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    player::PlayerCommand,
    state::{DisplayState, Glyphs},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Play,
    Stop,
    Next,
    Previous,
}
impl Control {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Stop => "stop",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }

    #[must_use]
    pub const fn command(self) -> PlayerCommand {
        match self {
            Self::Play => PlayerCommand::PlayPause,
            Self::Stop => PlayerCommand::Stop,
            Self::Next => PlayerCommand::Next,
            Self::Previous => PlayerCommand::Previous,
        }
    }
}
impl FromStr for Control {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_ref() {
            "play" => Ok(Self::Play),
            "stop" => Ok(Self::Stop),
            "next" => Ok(Self::Next),
            "previous" => Ok(Self::Previous),
            _ => Err(format!("Unknown button {s}")),
        }
    }
}

/// Identifies a clickable region of the module
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LogicalIndex {
    Text,
    Control(Control),
}
impl From<LogicalIndex> for &'static str {
    fn from(index: LogicalIndex) -> Self {
        match index {
            LogicalIndex::Text => "text",
            LogicalIndex::Control(c) => c.name(),
        }
    }
}
impl TryFrom<String> for LogicalIndex {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "text" {
            Ok(Self::Text)
        } else {
            s.parse().map(Self::Control)
        }
    }
}
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlGlyph {
    pub glyph: String,
    pub index: LogicalIndex,
}

#[derive(Clone, Debug, Default)]
pub struct ButtonRenderer {
    order: Vec<Control>,
}
impl ButtonRenderer {
    /// Keep the known button names in their configured order.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let order = names
            .into_iter()
            .filter_map(|name| {
                name.as_ref()
                    .parse::<Control>()
                    .inspect_err(|e| tracing::warn!(%e, "Ignoring button"))
                    .ok()
            })
            .collect();
        Self { order }
    }

    /// One glyph per configured button. The play button shows the pause glyph while playing.
    #[must_use]
    pub fn render(&self, glyphs: &Glyphs, state: DisplayState) -> Vec<ControlGlyph> {
        self.order
            .iter()
            .map(|&control| {
                let glyph = match control {
                    Control::Play if state == DisplayState::Playing => &glyphs.pause,
                    Control::Play => &glyphs.play,
                    Control::Stop => &glyphs.stop,
                    Control::Next => &glyphs.next,
                    Control::Previous => &glyphs.previous,
                };
                ControlGlyph {
                    glyph: glyph.clone(),
                    index: LogicalIndex::Control(control),
                }
            })
            .collect()
    }
}
