//! wa-notify - WhatsApp group notification gateway
//!
//! This daemon exposes a small HTTP API for sending backup/restore/validation
//! alerts into WhatsApp groups through an external WhatsApp Web bridge.

pub mod alert;
pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod session;

pub use error::{Error, Result};
