//! Session bootstrap
//!
//! One background task that binds the bridge session to its storage
//! directory, then watches the lifecycle until it reaches ready. The pairing
//! code is rendered to the operator log; handlers observe the state through
//! a watch channel and reject requests until ready.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::client::{BridgeClient, SessionState};

/// Drive the session from uninitialized to ready.
///
/// The state is only ever published forward; once ready is observed the task
/// ends and the session is never re-validated.
pub async fn run(
    client: Arc<BridgeClient>,
    session_dir: &Path,
    poll_interval_secs: u64,
    tx: watch::Sender<SessionState>,
) {
    if let Err(e) = tokio::fs::create_dir_all(session_dir).await {
        warn!(
            "Could not create session dir {}: {}",
            session_dir.display(),
            e
        );
    }

    let interval = Duration::from_secs(poll_interval_secs);

    // The bridge sidecar may come up after us; keep asking until it answers.
    loop {
        match client.start_session(session_dir).await {
            Ok(()) => break,
            Err(e) => {
                warn!("Bridge not reachable yet: {}", e);
                tokio::time::sleep(interval).await;
            }
        }
    }
    info!("Session storage: {}", session_dir.display());

    let mut last_state = SessionState::Uninitialized;
    let mut logged_code: Option<String> = None;

    loop {
        match client.status().await {
            Ok(status) => {
                if let Some(code) = status.pairing_code {
                    if logged_code.as_deref() != Some(code.as_str()) {
                        info!("Pair this device in WhatsApp with code: {}", code);
                        logged_code = Some(code);
                    }
                }

                if status.state != last_state {
                    last_state = status.state;
                    let _ = tx.send(status.state);
                    match status.state {
                        SessionState::AwaitingPairing => info!("Session awaiting pairing"),
                        SessionState::Ready => info!("WhatsApp session is ready"),
                        SessionState::Uninitialized => {}
                    }
                }

                if status.state == SessionState::Ready {
                    return;
                }
            }
            Err(e) => warn!("Session status poll failed: {}", e),
        }

        tokio::time::sleep(interval).await;
    }
}
