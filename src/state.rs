//! Mapping of playback status to glyphs and colors

use crate::player::PlaybackStatus;

/// The three states a player is displayed in
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum DisplayState {
    Playing,
    Paused,
    Stopped,
}
impl From<PlaybackStatus> for DisplayState {
    fn from(status: PlaybackStatus) -> Self {
        match status {
            PlaybackStatus::Playing => Self::Playing,
            PlaybackStatus::Paused => Self::Paused,
            PlaybackStatus::Stopped | PlaybackStatus::Unknown => Self::Stopped,
        }
    }
}

/// Color roles of the host bar
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ColorRole {
    Good,
    Degraded,
    Bad,
}
impl From<DisplayState> for ColorRole {
    fn from(state: DisplayState) -> Self {
        match state {
            DisplayState::Playing => Self::Good,
            DisplayState::Paused => Self::Degraded,
            DisplayState::Stopped => Self::Bad,
        }
    }
}

/// Default colors of the host bar
#[derive(Clone, Debug)]
pub struct Palette {
    pub good: String,
    pub degraded: String,
    pub bad: String,
}
impl Palette {
    #[must_use]
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Good => &self.good,
            ColorRole::Degraded => &self.degraded,
            ColorRole::Bad => &self.bad,
        }
    }
}

/// Per-state color overrides
#[derive(Clone, Debug, Default)]
pub struct StateColors {
    pub playing: Option<String>,
    pub paused: Option<String>,
    pub stopped: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Glyphs {
    pub play: String,
    pub pause: String,
    pub stop: String,
    pub next: String,
    pub previous: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classified<'a> {
    pub state: DisplayState,
    pub glyph: &'a str,
    pub color: &'a str,
}

#[derive(Clone, Debug)]
pub struct StateClassifier {
    pub glyphs: Glyphs,
    pub colors: StateColors,
    pub palette: Palette,
}
impl StateClassifier {
    #[must_use]
    pub fn classify(&self, status: PlaybackStatus) -> Classified<'_> {
        let state = DisplayState::from(status);
        let (glyph, color) = match state {
            DisplayState::Playing => (&self.glyphs.play, &self.colors.playing),
            DisplayState::Paused => (&self.glyphs.pause, &self.colors.paused),
            DisplayState::Stopped => (&self.glyphs.stop, &self.colors.stopped),
        };
        Classified {
            state,
            glyph,
            color: color
                .as_deref()
                .unwrap_or_else(|| self.palette.get(state.into())),
        }
    }

    #[must_use]
    pub fn bad_color(&self) -> &str {
        self.palette.get(ColorRole::Bad)
    }
}
