use zbus::{fdo::DBusProxy, names::BusName, proxy::CacheProperties, Connection};

use crate::{
    error::{PlayerError, PlayerResult},
    player::{PlaybackStatus, PlayerCommand, PlayerDirectory, PlayerHandle, TrackMetadata},
};

pub mod media_player2;
pub mod player;

use media_player2::MediaPlayer2Proxy;
use player::PlayerProxy;

pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Strip the MPRIS well-known prefix from a bus name, or return [`None`] if it's not a player.
#[must_use]
pub fn player_name(bus_name: &str) -> Option<&str> {
    bus_name
        .strip_prefix(MPRIS_PREFIX)
        .filter(|name| !name.is_empty())
}

/// MPRIS players on the session bus
pub struct BusDirectory {
    conn: Connection,
}
impl BusDirectory {
    pub const fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl PlayerDirectory for BusDirectory {
    type Player = BusPlayer;

    async fn list_running_players(&self) -> Vec<String> {
        let names = match DBusProxy::new(&self.conn).await {
            Ok(proxy) => proxy.list_names().await,
            Err(e) => Err(e.into()),
        };
        match names {
            Ok(names) => names
                .iter()
                .filter_map(|n| player_name(n.as_str()))
                .map(ToOwned::to_owned)
                .collect(),
            Err(e) => {
                tracing::warn!(?e, "Failed to list currently-owned names on DBus");
                Vec::new()
            }
        }
    }

    async fn connect(&self, name: &str) -> Option<BusPlayer> {
        match BusPlayer::connect(&self.conn, name).await {
            Ok(player) => Some(player),
            Err(e @ PlayerError::Vanished(_)) => {
                tracing::debug!(%e, "Player left the bus before connecting");
                None
            }
            Err(e) => {
                tracing::warn!(?e, name, "Failed to connect to player");
                None
            }
        }
    }
}

/// A player reached through its `org.mpris.MediaPlayer2.<name>` bus name
pub struct BusPlayer {
    root: MediaPlayer2Proxy<'static>,
    player: PlayerProxy<'static>,
}
impl BusPlayer {
    async fn connect(conn: &Connection, name: &str) -> PlayerResult<Self> {
        let bus_name =
            BusName::try_from(format!("{MPRIS_PREFIX}{name}")).map_err(zbus::Error::from)?;
        if !DBusProxy::new(conn)
            .await?
            .name_has_owner(bus_name.clone())
            .await?
        {
            return Err(PlayerError::Vanished(name.to_owned()));
        }
        // Every refresh re-reads properties, so skip the cache and its signal subscription
        let root = MediaPlayer2Proxy::builder(conn)
            .destination(bus_name.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        let player = PlayerProxy::builder(conn)
            .destination(bus_name)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        Ok(Self { root, player })
    }
}

impl PlayerHandle for BusPlayer {
    async fn identity(&self) -> PlayerResult<String> {
        Ok(self.root.identity().await?)
    }
    async fn playback_status(&self) -> PlayerResult<PlaybackStatus> {
        Ok(PlaybackStatus::from(
            self.player.playback_status().await?.as_str(),
        ))
    }
    async fn position(&self) -> PlayerResult<i64> {
        Ok(self.player.position().await?)
    }
    async fn metadata(&self) -> PlayerResult<TrackMetadata> {
        TrackMetadata::from_dbus(&self.player.metadata().await?)
    }
    async fn invoke(&self, command: PlayerCommand) -> PlayerResult<()> {
        match command {
            PlayerCommand::PlayPause => self.player.play_pause().await?,
            PlayerCommand::Stop => self.player.stop().await?,
            PlayerCommand::Next => self.player.next().await?,
            PlayerCommand::Previous => self.player.previous().await?,
        }
        Ok(())
    }
}
