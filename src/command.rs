//! Routing of click events to player commands

use std::str::FromStr;

use serde::Deserialize;

use crate::{
    buttons::LogicalIndex,
    player::{PlayerCommand, PlayerHandle},
    priority::Selected,
};

/// The mouse button that activates every control glyph
pub const PRIMARY_BUTTON: u32 = 1;

/// A mouse button number, or `none`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding(pub Option<u32>);
impl FromStr for Binding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self(None));
        }
        s.parse()
            .map(|b| Self(Some(b)))
            .map_err(|e| format!("{s} is neither a mouse button nor \"none\": {e}"))
    }
}
impl Binding {
    #[must_use]
    pub fn matches(self, button: u32) -> bool {
        self.0 == Some(button)
    }
}

/// Mouse buttons acting on the status text
#[derive(Clone, Copy, Debug)]
pub struct ButtonBindings {
    pub play: Binding,
    pub stop: Binding,
    pub next: Binding,
    pub previous: Binding,
}

/// A click reported by the bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ClickEvent {
    #[serde(alias = "instance")]
    pub index: LogicalIndex,
    pub button: u32,
}

#[derive(Clone, Debug)]
pub struct CommandRouter {
    pub bindings: ButtonBindings,
}
impl CommandRouter {
    #[must_use]
    pub fn route(&self, event: &ClickEvent) -> Option<PlayerCommand> {
        match event.index {
            LogicalIndex::Text => [
                (self.bindings.play, PlayerCommand::PlayPause),
                (self.bindings.stop, PlayerCommand::Stop),
                (self.bindings.next, PlayerCommand::Next),
                (self.bindings.previous, PlayerCommand::Previous),
            ]
            .into_iter()
            .find(|(binding, _)| binding.matches(event.button))
            .map(|(_, command)| command),
            LogicalIndex::Control(control) if event.button == PRIMARY_BUTTON => {
                Some(control.command())
            }
            LogicalIndex::Control(_) => None,
        }
    }

    /// Send the routed command to the player selected by the last refresh.
    ///
    /// Returns the command that was sent. Failures are logged and swallowed.
    pub async fn dispatch<P: PlayerHandle>(
        &self,
        event: &ClickEvent,
        selected: Option<&Selected<P>>,
    ) -> Option<PlayerCommand> {
        let command = self.route(event)?;
        let Some(selected) = selected else {
            tracing::debug!(?event, "Click without a selected player");
            return None;
        };
        match selected.player.invoke(command).await {
            Ok(()) => {
                tracing::info!(player = %selected.name, ?command, "Command sent");
                Some(command)
            }
            Err(e) => {
                tracing::warn!(?e, player = %selected.name, ?command, "Failed to send command");
                None
            }
        }
    }
}
