use std::{collections::HashMap, ops::Deref as _};

use zbus::zvariant::OwnedValue;

use crate::{
    error::{PlayerError, PlayerResult},
    utils::{extract_first_str, extract_micros, extract_str},
};

/// Current playback status of a MPRIS-compliant player
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    Unknown,
}
impl From<&str> for PlaybackStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_ref() {
            "playing" => Self::Playing,
            "paused" => Self::Paused,
            "stopped" => Self::Stopped,
            _ => {
                tracing::debug!(status = s, "Unknown PlaybackStatus");
                Self::Unknown
            }
        }
    }
}

/// The subset of `xesam:`/`mpris:` metadata the module renders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
    pub length: Option<i64>,
}
impl TrackMetadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Pick the rendered fields out of a raw `Metadata` property.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::MalformedMetadata`] if a known key carries a value of the wrong type.
    pub fn from_dbus(metadata: &HashMap<String, OwnedValue>) -> PlayerResult<Self> {
        let string = |key: &'static str| {
            metadata
                .get(key)
                .map(|v| {
                    extract_str(v.deref())
                        .map(ToString::to_string)
                        .ok_or(PlayerError::MalformedMetadata { key })
                })
                .transpose()
        };
        Ok(Self {
            title: string("xesam:title")?,
            album: string("xesam:album")?,
            url: string("xesam:url")?,
            artist: metadata
                .get("xesam:artist")
                .map(|v| {
                    extract_first_str(v.deref()).ok_or(PlayerError::MalformedMetadata {
                        key: "xesam:artist",
                    })
                })
                .transpose()?,
            length: metadata
                .get("mpris:length")
                .map(|v| {
                    extract_micros(v.deref()).ok_or(PlayerError::MalformedMetadata {
                        key: "mpris:length",
                    })
                })
                .transpose()?,
        })
    }
}

/// The four control methods of `org.mpris.MediaPlayer2.Player` the module invokes
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum PlayerCommand {
    PlayPause,
    Stop,
    Next,
    Previous,
}

/// One connected player agent.
#[allow(async_fn_in_trait)]
pub trait PlayerHandle {
    /// Human readable name, e.g. `VLC media player`.
    async fn identity(&self) -> PlayerResult<String>;
    async fn playback_status(&self) -> PlayerResult<PlaybackStatus>;
    /// Playback position in microseconds.
    async fn position(&self) -> PlayerResult<i64>;
    async fn metadata(&self) -> PlayerResult<TrackMetadata>;
    async fn invoke(&self, command: PlayerCommand) -> PlayerResult<()>;
}

/// Enumerates running player agents and connects to them by name.
///
/// Both operations absorb transport failures: discovery is racy and a player may
/// vanish between the two calls.
#[allow(async_fn_in_trait)]
pub trait PlayerDirectory {
    type Player: PlayerHandle;

    /// Player names with the well-known prefix stripped, in bus order.
    async fn list_running_players(&self) -> Vec<String>;
    async fn connect(&self, name: &str) -> Option<Self::Player>;
}

#[cfg(test)]
mod tests {
    use zbus::zvariant::Value;

    use super::*;

    fn owned(v: Value<'_>) -> OwnedValue {
        v.try_into().unwrap()
    }

    #[test]
    fn parse_status() {
        assert_eq!(PlaybackStatus::from("Playing"), PlaybackStatus::Playing);
        assert_eq!(PlaybackStatus::from("Paused"), PlaybackStatus::Paused);
        assert_eq!(PlaybackStatus::from("stopped"), PlaybackStatus::Stopped);
        assert_eq!(PlaybackStatus::from("Buffering"), PlaybackStatus::Unknown);
    }

    #[test]
    fn metadata_fields() {
        let raw = HashMap::from([
            ("xesam:title".to_owned(), owned(Value::from("Song"))),
            ("xesam:album".to_owned(), owned(Value::from("Album"))),
            (
                "xesam:artist".to_owned(),
                owned(Value::from(vec!["Artist", "Featuring"])),
            ),
            (
                "xesam:url".to_owned(),
                owned(Value::from("file:///music/song.flac")),
            ),
            ("mpris:length".to_owned(), owned(Value::I64(225_000_000))),
            (
                "mpris:trackid".to_owned(),
                owned(Value::from("/org/mpris/track/1")),
            ),
        ]);
        assert_eq!(
            TrackMetadata::from_dbus(&raw).unwrap(),
            TrackMetadata {
                title: Some("Song".to_owned()),
                album: Some("Album".to_owned()),
                artist: Some("Artist".to_owned()),
                url: Some("file:///music/song.flac".to_owned()),
                length: Some(225_000_000),
            }
        );
    }

    #[test]
    fn empty_metadata() {
        let metadata = TrackMetadata::from_dbus(&HashMap::new()).unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn malformed_metadata() {
        let raw = HashMap::from([("xesam:title".to_owned(), owned(Value::U32(3)))]);
        assert!(matches!(
            TrackMetadata::from_dbus(&raw),
            Err(PlayerError::MalformedMetadata { key: "xesam:title" })
        ));
    }

    #[test]
    fn malformed_artist() {
        for artist in [Value::U32(7), Value::from(Vec::<String>::new())] {
            let raw = HashMap::from([
                ("xesam:title".to_owned(), owned(Value::from("Song"))),
                ("xesam:artist".to_owned(), owned(artist)),
            ]);
            assert!(matches!(
                TrackMetadata::from_dbus(&raw),
                Err(PlayerError::MalformedMetadata { key: "xesam:artist" })
            ));
        }
    }
}
