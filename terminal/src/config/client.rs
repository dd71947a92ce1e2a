//! Process configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// Origin used when no `API_BASE_URL` override is stored
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8000";
/// Action source tag sent as `origem`
pub const DEFAULT_ORIGIN_TAG: &str = "instagram";

/// Client process configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme + host (+ port) that relative service paths resolve against
    pub api_origin: String,
    /// Session store file
    pub config_path: PathBuf,
    /// Action source tag
    pub origin_tag: String,
    /// Per-request timeout
    pub http_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            config_path: PathBuf::from("./ganhar-config.json"),
            origin_tag: DEFAULT_ORIGIN_TAG.to_string(),
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_origin: std::env::var("GANHAR_API_ORIGIN")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_origin),
            config_path: std::env::var("GANHAR_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_path),
            origin_tag: std::env::var("GANHAR_ORIGIN_TAG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.origin_tag),
            http_timeout: std::env::var("GANHAR_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Configuration pointing at a specific origin, everything else default
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            api_origin: origin.into(),
            ..Self::default()
        }
    }
}
