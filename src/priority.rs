//! Picks the one player to display
//!
//! The configured priority list orders the candidates, but live playback state wins
//! over it: a playing player beats a paused one, which beats a stopped one. Ties are
//! broken by candidate order.


use std::{convert::Infallible, str::FromStr};

use crate::player::{PlaybackStatus, PlayerDirectory, PlayerHandle as _};

pub const WILDCARD: &str = "*";

/// Ordered player preference, e.g. `mpd,vlc,*`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriorityList(Vec<String>);
impl FromStr for PriorityList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        ))
    }
}
impl PriorityList {
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.0.iter().any(|n| n == WILDCARD)
    }

    /// Order running players by priority.
    ///
    /// Listed players come first in list order. The wildcard appends the remaining
    /// players in enumeration order; without it, unlisted players are dropped.
    #[must_use]
    pub fn candidates<'a>(&self, running: &'a [String]) -> Vec<&'a str> {
        let mut remaining: Vec<&str> = running.iter().map(String::as_str).collect();
        let mut ordered = Vec::with_capacity(remaining.len());
        for name in self.0.iter().filter(|n| *n != WILDCARD) {
            if let Some(i) = remaining.iter().position(|r| *r == name.as_str()) {
                ordered.push(remaining.remove(i));
            }
        }
        if self.has_wildcard() {
            ordered.append(&mut remaining);
        }
        ordered
    }
}

/// The player chosen for one refresh cycle
#[derive(Debug)]
pub struct Selected<P> {
    pub name: String,
    pub player: P,
    /// [`None`] if the status query failed; ranked like [`PlaybackStatus::Unknown`]
    pub status: Option<PlaybackStatus>,
}
impl<P> Selected<P> {
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status.unwrap_or(PlaybackStatus::Unknown)
    }
}

/// Enumerate, order and rank the running players.
///
/// Players that cannot be connected are skipped. Returns [`None`] if no candidate is left.
pub async fn select_player<D: PlayerDirectory>(
    directory: &D,
    priority: Option<&PriorityList>,
) -> Option<Selected<D::Player>> {
    let running = directory.list_running_players().await;
    let candidates = match priority {
        None => running.iter().map(String::as_str).collect(),
        Some(priority) => priority.candidates(&running),
    };
    tracing::debug!(?running, ?candidates, "Ranking players");

    let mut paused = None;
    let mut stopped = None;
    for name in candidates {
        let Some(player) = directory.connect(name).await else {
            continue;
        };
        let status = player
            .playback_status()
            .await
            .inspect_err(|e| tracing::debug!(?e, name, "Failed to get player playback status"))
            .ok();
        let selected = Selected {
            name: name.to_owned(),
            player,
            status,
        };
        match selected.status() {
            PlaybackStatus::Playing => return Some(selected),
            PlaybackStatus::Paused => {
                paused.get_or_insert(selected);
            }
            PlaybackStatus::Stopped | PlaybackStatus::Unknown => {
                stopped.get_or_insert(selected);
            }
        }
    }
    paused.or(stopped)
}
