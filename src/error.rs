use thiserror::Error;

/// Failure while talking to a single player.
///
/// Nothing in the refresh or click path propagates this further than a log line:
/// the caller decides which placeholder to fall back to.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("D-Bus call failed: {0}")]
    Bus(#[from] zbus::Error),
    #[error("D-Bus call failed: {0}")]
    Fdo(#[from] zbus::fdo::Error),
    #[error("metadata field {key} has unexpected type")]
    MalformedMetadata { key: &'static str },
    #[error("player {0} is gone")]
    Vanished(String),
}

pub type PlayerResult<T> = Result<T, PlayerError>;
