//! WhatsApp Web bridge client
//!
//! The WhatsApp session itself lives in an external bridge sidecar
//! (whatsapp-web.js behind a small REST surface). This module defines the
//! `ChatClient` seam consumed by the HTTP handlers and `BridgeClient`, the
//! reqwest-backed implementation of it.
//!
//! Bridge surface:
//! - `POST /session/start` `{storagePath}`: bind a session to a storage dir
//! - `GET  /session/status`: `{state, pairingCode?}`
//! - `GET  /chats`: `[{id: {server, _serialized}, name}]`
//! - `POST /messages` `{chatId, text}`

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier namespace marking multi-party group chats
pub const GROUP_SERVER: &str = "g.us";

/// Serialized chat identifier as the bridge reports it
#[derive(Debug, Clone, Deserialize)]
pub struct ChatId {
    pub server: String,
    #[serde(rename = "_serialized")]
    pub serialized: String,
}

/// One conversation descriptor from the bridge's chat list
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub name: Option<String>,
}

impl Chat {
    /// Whether this chat is a multi-party group
    pub fn is_group(&self) -> bool {
        self.id.server == GROUP_SERVER
    }
}

/// Session lifecycle as observed through the bridge, never driven by us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    AwaitingPairing,
    Ready,
    #[serde(other)]
    Uninitialized,
}

/// Response of `GET /session/status`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub state: SessionState,
    #[serde(default)]
    pub pairing_code: Option<String>,
}

/// Seam between the HTTP handlers and the external messaging session
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Enumerate all conversations known to the session
    async fn chats(&self) -> Result<Vec<Chat>>;

    /// Dispatch one text message to a chat. One attempt, no retry.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// `ChatClient` backed by the bridge sidecar's REST surface
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartSessionBody<'a> {
    storage_path: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl BridgeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the bridge to start (or resume) the session bound to `storage_dir`
    pub async fn start_session(&self, storage_dir: &Path) -> Result<()> {
        let storage = storage_dir.to_string_lossy();
        let body = StartSessionBody {
            storage_path: &storage,
        };
        let resp = self
            .http
            .post(self.url("/session/start"))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Bridge(format!(
                "session start failed: {}",
                resp.status()
            )));
        }
        Ok(())
    }

    /// Observe the session lifecycle state
    pub async fn status(&self) -> Result<SessionStatus> {
        let resp = self
            .http
            .get(self.url("/session/status"))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl ChatClient for BridgeClient {
    async fn chats(&self) -> Result<Vec<Chat>> {
        let resp = self
            .http
            .get(self.url("/chats"))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let resp = self
            .http
            .post(self.url("/messages"))
            .json(&SendMessageBody { chat_id, text })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Bridge(format!(
                "send to {} failed: {}",
                chat_id,
                resp.status()
            )));
        }
        Ok(())
    }
}
