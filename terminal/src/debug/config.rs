//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "ganhar_terminal=info,warn";
pub const LOG_FILE_NAME: &str = "ganhar-client.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Filter used when `RUST_LOG` is unset or invalid
    pub log_level: String,
    /// JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("GANHAR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            json: std::env::var("GANHAR_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
