//! Refresh and click entry points of the status bar module


use std::time::Duration;

use crate::{
    buttons::{ButtonRenderer, ControlGlyph},
    command::{ClickEvent, CommandRouter},
    format::{TextFormatter, TrackInfo, UNKNOWN},
    output::{cached_until, Layout, Response},
    player::{PlayerCommand, PlayerDirectory, PlayerHandle},
    priority::{select_player, PriorityList, Selected},
    state::StateClassifier,
};

/// What the module shows for one refresh cycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayPayload {
    pub text: String,
    pub color: String,
    pub controls: Vec<ControlGlyph>,
}

#[derive(Clone, Debug)]
pub struct Module {
    pub interval: Duration,
    pub priority: Option<PriorityList>,
    pub classifier: StateClassifier,
    pub formatter: TextFormatter,
    /// Text shown when no player is selected
    pub format_none: String,
    pub buttons: ButtonRenderer,
    pub router: CommandRouter,
    pub layout: Layout,
}

impl Module {
    /// Select a player and render it.
    ///
    /// The returned handle is the only player a following click may act on.
    pub async fn refresh<D: PlayerDirectory>(
        &self,
        directory: &D,
    ) -> (Response, Option<Selected<D::Player>>) {
        let selected = select_player(directory, self.priority.as_ref()).await;
        let payload = match &selected {
            Some(selected) => self.render(selected).await,
            None => self.render_none(),
        };
        let response = Response::new(cached_until(self.interval), payload, &self.layout);
        (response, selected)
    }

    pub async fn on_click<P: PlayerHandle>(
        &self,
        event: &ClickEvent,
        selected: Option<&Selected<P>>,
    ) -> Option<PlayerCommand> {
        self.router.dispatch(event, selected).await
    }

    fn render_none(&self) -> DisplayPayload {
        tracing::debug!("No player selected");
        DisplayPayload {
            text: self.format_none.clone(),
            color: self.classifier.bad_color().to_owned(),
            controls: Vec::new(),
        }
    }

    /// Query the selected player and format its state.
    ///
    /// A failed query falls back to placeholders and paints the text in the bad color.
    pub async fn render<P: PlayerHandle>(&self, selected: &Selected<P>) -> DisplayPayload {
        let classified = self.classifier.classify(selected.status());
        let identity = selected
            .player
            .identity()
            .await
            .inspect_err(|e| tracing::warn!(?e, player = %selected.name, "Failed to get player identity"))
            .ok();
        let position = selected
            .player
            .position()
            .await
            .inspect_err(|e| tracing::warn!(?e, player = %selected.name, "Failed to get player position"))
            .ok();
        let metadata = selected
            .player
            .metadata()
            .await
            .inspect_err(|e| tracing::warn!(?e, player = %selected.name, "Failed to get player metadata"))
            .ok();
        let failed = selected.status.is_none()
            || identity.is_none()
            || position.is_none()
            || metadata.is_none();
        tracing::debug!(player = %selected.name, ?classified, ?metadata, failed, "Rendering player");

        let text = self.formatter.render(&TrackInfo {
            player: identity.as_deref(),
            state: if selected.status.is_some() {
                classified.glyph
            } else {
                UNKNOWN
            },
            position,
            metadata: metadata.as_ref(),
        });
        let color = if failed {
            self.classifier.bad_color()
        } else {
            classified.color
        };
        DisplayPayload {
            text,
            color: color.to_owned(),
            controls: self
                .buttons
                .render(&self.classifier.glyphs, classified.state),
        }
    }
}
