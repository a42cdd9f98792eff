//! wa-notify daemon
//!
//! Binds the HTTP API on port 3001 and bootstraps the WhatsApp Web bridge
//! session in the background.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wa_notify::client::{BridgeClient, SessionState};
use wa_notify::config::Config;
use wa_notify::server::{self, AppState};
use wa_notify::session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::from_env();
    info!("Running in {} mode", config.mode.as_str());
    info!("Using WhatsApp session path: {}", config.session_dir.display());
    info!("Bridge at {}", config.bridge_url);

    let client = Arc::new(BridgeClient::new(&config.bridge_url));
    let (session_tx, session_rx) = watch::channel(SessionState::Uninitialized);

    {
        let client = client.clone();
        let session_dir = config.session_dir.clone();
        let interval = config.status_poll_interval_secs;
        tokio::spawn(async move {
            session::run(client, &session_dir, interval, session_tx).await;
        });
    }

    let state = AppState {
        client,
        session: session_rx,
    };
    let app = server::router(state);

    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    info!(
        "WhatsApp notification API listening on http://localhost:{}",
        listener.local_addr()?.port()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
