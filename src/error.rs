//! Error types for wa-notify

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bridge error: {0}")]
    Bridge(String),

    #[error("unknown messageType: {0}")]
    UnknownAlertKind(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("session not ready")]
    NotReady,
}

pub type Result<T> = std::result::Result<T, Error>;
