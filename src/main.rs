use anyhow::{Context as _, Result};
use clap::Parser as _;
use event_loop::event_loop;
use zbus::Connection;

mod args;
mod buttons;
mod command;
mod dbus;
mod error;
mod event_loop;
#[cfg(test)]
mod fake;
mod format;
mod module;
mod output;
mod player;
mod priority;
mod state;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = args::Args::parse();
    args.init_tracing_subscriber()?;
    let module = args.into_module()?;

    let connection = Connection::session()
        .await
        .context("Failed to connect to the session bus")?;
    event_loop(module, dbus::BusDirectory::new(connection)).await
}
