//! In-memory player agents standing in for the session bus

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::{PlayerError, PlayerResult},
    player::{PlaybackStatus, PlayerCommand, PlayerDirectory, PlayerHandle, TrackMetadata},
};

#[derive(Clone, Debug)]
pub struct FakePlayer {
    pub name: String,
    pub identity: Option<String>,
    /// [`None`] makes the status query fail
    pub status: Option<PlaybackStatus>,
    pub position: Option<i64>,
    pub metadata: Option<TrackMetadata>,
    /// Listed on the bus but refuses connections
    pub vanished: bool,
    /// Commands fail as if the agent stopped answering
    pub unresponsive: bool,
    pub invoked: Rc<RefCell<Vec<PlayerCommand>>>,
}
impl FakePlayer {
    pub fn new(name: &str, status: PlaybackStatus) -> Self {
        Self {
            name: name.to_owned(),
            identity: Some(name.to_uppercase()),
            status: Some(status),
            position: Some(0),
            metadata: Some(TrackMetadata::default()),
            vanished: false,
            unresponsive: false,
            invoked: Rc::default(),
        }
    }
    pub fn with_metadata(mut self, metadata: TrackMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
    pub fn failing_status(mut self) -> Self {
        self.status = None;
        self
    }
    pub fn vanished(mut self) -> Self {
        self.vanished = true;
        self
    }
    pub fn unresponsive(mut self) -> Self {
        self.unresponsive = true;
        self
    }
    pub fn invoked(&self) -> Vec<PlayerCommand> {
        self.invoked.borrow().clone()
    }

    fn gone(&self) -> PlayerError {
        PlayerError::Vanished(self.name.clone())
    }
}

impl PlayerHandle for FakePlayer {
    async fn identity(&self) -> PlayerResult<String> {
        self.identity.clone().ok_or_else(|| self.gone())
    }
    async fn playback_status(&self) -> PlayerResult<PlaybackStatus> {
        self.status.ok_or_else(|| self.gone())
    }
    async fn position(&self) -> PlayerResult<i64> {
        self.position.ok_or_else(|| self.gone())
    }
    async fn metadata(&self) -> PlayerResult<TrackMetadata> {
        self.metadata.clone().ok_or_else(|| self.gone())
    }
    async fn invoke(&self, command: PlayerCommand) -> PlayerResult<()> {
        if self.unresponsive {
            return Err(self.gone());
        }
        self.invoked.borrow_mut().push(command);
        Ok(())
    }
}

/// Players in bus enumeration order
#[derive(Clone, Debug, Default)]
pub struct FakeDirectory(pub Vec<FakePlayer>);

impl PlayerDirectory for FakeDirectory {
    type Player = FakePlayer;

    async fn list_running_players(&self) -> Vec<String> {
        self.0.iter().map(|p| p.name.clone()).collect()
    }
    async fn connect(&self, name: &str) -> Option<FakePlayer> {
        self.0
            .iter()
            .find(|p| p.name == name && !p.vanished)
            .cloned()
    }
}
