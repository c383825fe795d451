use std::sync::Arc;

use clap::Parser;
use lol_overlay::app::{AppContext, spawn_catalog_fetch};
use lol_overlay::config::{ConfigError, OverlayConfig};
use lol_overlay::net::{BackendClient, FetchError};
use lol_overlay::shell::HostCommand;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("backend client: {0}")]
    Backend(#[from] FetchError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    let config = OverlayConfig::parse();
    config.validate()?;

    let client = Arc::new(BackendClient::new(&config.backend_url, config.timeouts())?);
    let mut ctx = AppContext::new(config);

    let (fetch, catalog) = spawn_catalog_fetch(
        ctx.config().item_data_url(),
        ctx.config().timeouts(),
        ctx.shutdown_signal().clone(),
    );
    ctx.track(fetch);
    let mut host_rx = ctx.start(client, catalog);

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!(error = %e, "ctrl-c handler failed");
                }
                break;
            }
            command = host_rx.recv() => match command {
                Some(command) => log_host_command(&command),
                None => break,
            },
        }
    }

    info!("shutting down");
    ctx.shutdown().await;
    Ok(())
}

/// Without an attached window the host side is a log sink.
fn log_host_command(command: &HostCommand) {
    match command {
        HostCommand::SetIgnoreMouseEvents { ignore, forward } => {
            info!(ignore, forward, "set ignore mouse events");
        }
        HostCommand::Present(scene) => {
            info!(mode = ?scene.mode(), "present scene");
            match serde_json::to_string(scene) {
                Ok(json) => debug!(%json, "scene"),
                Err(e) => warn!(error = %e, "scene serialize failed"),
            }
        }
    }
}
