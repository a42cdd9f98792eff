//! HTTP adapter
//!
//! Three endpoints translating HTTP requests into bridge calls:
//! `GET /groups`, `POST /send`, `POST /send-alert`. Handlers share one
//! `AppState` and are gated on session readiness; before the session is
//! ready every endpoint answers 503 rather than forwarding to an unpaired
//! bridge.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::watch;
use tracing::{error, info};

use crate::alert::{self, AlertKind, AlertReport};
use crate::client::{Chat, ChatClient, SessionState};
use crate::error::{Error, Result};

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
    /// Session lifecycle as published by the bootstrap task
    pub session: watch::Receiver<SessionState>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/groups", get(list_groups))
        .route("/send", post(send_message))
        .route("/send-alert", post(send_alert))
        .with_state(state)
}

/// One group projected for the API: display name plus serialized id
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendBody {
    pub group_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertBody {
    pub group_id: Option<String>,
    pub message_type: Option<String>,
    pub server: Option<String>,
    pub database: Option<String>,
    pub backup_file: Option<String>,
    pub timestamp: Option<String>,
    pub error_message: Option<String>,
}

type ApiResponse = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, message: &str) -> ApiResponse {
    (
        status,
        Json(json!({"status": "error", "message": message})),
    )
}

fn bad_request(err: &Error) -> ApiResponse {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

/// Reject requests until the bootstrap task has observed a ready session
fn not_ready(state: &AppState) -> Option<ApiResponse> {
    if *state.session.borrow() == SessionState::Ready {
        None
    } else {
        Some(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &Error::NotReady.to_string(),
        ))
    }
}

/// Reject a missing or blank field. The value itself is returned untouched;
/// dispatched text must reach the bridge verbatim.
fn require<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingField(name)),
    }
}

/// GET /groups: enumerate multi-party groups with their serialized ids
async fn list_groups(State(state): State<AppState>) -> ApiResponse {
    if let Some(resp) = not_ready(&state) {
        return resp;
    }

    match state.client.chats().await {
        Ok(chats) => {
            let groups: Vec<Group> = chats
                .into_iter()
                .filter(Chat::is_group)
                .map(|chat| Group {
                    name: chat.name.unwrap_or_default(),
                    id: chat.id.serialized,
                })
                .collect();
            (
                StatusCode::OK,
                Json(json!({"status": "success", "groups": groups})),
            )
        }
        Err(e) => {
            error!("Failed to list chats: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// POST /send: forward a raw message to a group
async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendBody>,
) -> ApiResponse {
    if let Some(resp) = not_ready(&state) {
        return resp;
    }

    let group_id = match require(body.group_id.as_deref(), "groupId") {
        Ok(v) => v,
        Err(e) => return bad_request(&e),
    };
    let message = match require(body.message.as_deref(), "message") {
        Ok(v) => v,
        Err(e) => return bad_request(&e),
    };

    dispatch(&state, group_id, message).await
}

/// POST /send-alert: render an alert template and forward it to a group
async fn send_alert(
    State(state): State<AppState>,
    Json(body): Json<AlertBody>,
) -> ApiResponse {
    if let Some(resp) = not_ready(&state) {
        return resp;
    }

    let group_id = match require(body.group_id.as_deref(), "groupId") {
        Ok(v) => v.to_string(),
        Err(e) => return bad_request(&e),
    };
    let kind = match require(body.message_type.as_deref(), "messageType")
        .and_then(AlertKind::from_str)
    {
        Ok(kind) => kind,
        Err(e) => return bad_request(&e),
    };

    let report = AlertReport {
        server: body.server,
        database: body.database,
        backup_file: body.backup_file,
        timestamp: body.timestamp,
        error_message: body.error_message,
    };
    let text = alert::render(kind, &report);

    dispatch(&state, &group_id, &text).await
}

/// One send attempt against the bridge, mapped to the API response shape
async fn dispatch(state: &AppState, group_id: &str, text: &str) -> ApiResponse {
    match state.client.send_message(group_id, text).await {
        Ok(()) => {
            info!("Message sent to group {}", group_id);
            (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "message": format!("Sent to group {}", group_id),
                })),
            )
        }
        Err(e) => {
            error!("Error sending message to {}: {}", group_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send")
        }
    }
}
