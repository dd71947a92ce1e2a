//! # Common Error Types
//!
//! Consolidated error handling for the Ganhar client engine.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a usable response (connection
//!   refused, timeout, undecodable body)
//! - **Api**: the service answered with a well-formed error body
//! - **Validation**: a local precondition failed (no compatible action, claim
//!   no longer active, invalid withdrawal amount)
//! - **Config**: the persisted session store could not be read or written
//!
//! Views never branch on the category: every failure collapses to the message
//! returned by [`AppError::user_message`], which is what toasts and inline
//! error views display.
//!
//! ```rust
//! use ganhar_terminal::core::error::AppError;
//!
//! let err = AppError::Api("Claim não encontrado".to_string());
//! assert_eq!(err.user_message(), "Claim não encontrado");
//! assert_eq!(err.to_string(), "API error: Claim não encontrado");
//! ```

use thiserror::Error;

/// Generic message used when an error response carries no `error` field
pub const GENERIC_API_ERROR: &str = "Erro";

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure or a response body that could not be decoded
    #[error("Network error: {0}")]
    Network(String),

    /// Error response from the service, carrying its message
    #[error("API error: {0}")]
    Api(String),

    /// Local validation failure; no request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session configuration store failure
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Message shown to the user, without the category prefix
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Network(msg)
            | AppError::Api(msg)
            | AppError::Validation(msg)
            | AppError::Config(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
