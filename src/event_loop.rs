use anyhow::{Context as _, Result};
use tokio::{
    io::{stdin, AsyncBufReadExt as _, BufReader},
    select,
    time::{interval, MissedTickBehavior},
};

use crate::{command::ClickEvent, module::Module, player::PlayerDirectory};

/// Parse one line of click input.
///
/// Accepts bare JSON objects as well as the elements of an i3bar-style endless array
/// (`[`, then `{..}`, then `,{..}`, ...).
pub fn parse_click(line: &str) -> Option<ClickEvent> {
    let line = line.trim().trim_start_matches(['[', ',']).trim_start();
    if line.is_empty() {
        return None;
    }
    serde_json::from_str(line)
        .inspect_err(|e| tracing::warn!(%e, line, "Ignoring malformed click event"))
        .ok()
}

/// Refresh on every tick and route clicks read from stdin, one at a time.
///
/// # Errors
///
/// Returns an error if stdout can no longer be written.
pub async fn event_loop<D: PlayerDirectory>(module: Module, directory: D) -> Result<()> {
    let mut refresh_timer = interval(module.interval);
    refresh_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut clicks = BufReader::new(stdin()).lines();
    let mut clicks_open = true;
    let mut selected = None;

    loop {
        select! {
            _ = refresh_timer.tick() => {
                let (response, current) = module.refresh(&directory).await;
                tracing::debug!(player = ?current.as_ref().map(|s| &s.name), "Refreshed");
                response.print().context("Failed to write response to stdout")?;
                selected = current;
            }
            line = clicks.next_line(), if clicks_open => match line {
                Ok(Some(line)) => {
                    let Some(event) = parse_click(&line) else { continue };
                    tracing::debug!(?event, "Click event received");
                    if module.on_click(&event, selected.as_ref()).await.is_some() {
                        refresh_timer.reset_immediately();
                    }
                }
                Ok(None) => {
                    tracing::info!("Click input closed");
                    clicks_open = false;
                }
                Err(e) => {
                    tracing::error!(?e, "Failed to read click input");
                    clicks_open = false;
                }
            },
        }
    }
}
