//! Configuration and paths

use std::path::PathBuf;

/// Port the HTTP API listens on
pub const LISTEN_PORT: u16 = 3001;

/// Session storage path inside the container image
pub const CONTAINER_SESSION_DIR: &str = "/usr/src/app/session";

/// Deployment mode, selected by `WA_NOTIFY_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

/// All configurable paths and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Credential/session storage for the WhatsApp Web bridge
    pub session_dir: PathBuf,
    /// Base URL of the bridge sidecar
    pub bridge_url: String,
    pub listen_port: u16,
    /// Cadence of session status polls during bootstrap
    pub status_poll_interval_secs: u64,
}

impl Config {
    /// Build config from the process environment
    pub fn from_env() -> Self {
        let mode = match std::env::var("WA_NOTIFY_ENV").as_deref() {
            Ok("production") => Mode::Production,
            _ => Mode::Development,
        };

        let session_dir = match mode {
            Mode::Production => PathBuf::from(CONTAINER_SESSION_DIR),
            Mode::Development => PathBuf::from("session"),
        };

        let bridge_url = std::env::var("WA_NOTIFY_BRIDGE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

        Self {
            mode,
            session_dir,
            bridge_url,
            listen_port: LISTEN_PORT,
            status_poll_interval_secs: 2,
        }
    }

    /// Create config for testing with custom paths and bridge
    pub fn for_test(temp_dir: &std::path::Path, bridge_url: &str) -> Self {
        Self {
            mode: Mode::Development,
            session_dir: temp_dir.join("session"),
            bridge_url: bridge_url.to_string(),
            listen_port: 0,
            status_poll_interval_secs: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_str() {
        assert_eq!(Mode::Development.as_str(), "development");
        assert_eq!(Mode::Production.as_str(), "production");
    }

    #[test]
    fn test_test_config() {
        let temp = std::env::temp_dir();
        let config = Config::for_test(&temp, "http://127.0.0.1:3000");
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.session_dir, temp.join("session"));
        assert_eq!(config.bridge_url, "http://127.0.0.1:3000");
        assert_eq!(config.listen_port, 0);
    }

    #[test]
    fn test_listen_port() {
        assert_eq!(LISTEN_PORT, 3001);
    }
}
