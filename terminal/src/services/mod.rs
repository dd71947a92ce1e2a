//! # Services Module
//!
//! External integrations for the Ganhar client.
//!
//! ```text
//! services/
//! ├── api/        - HTTP gateway to the earnings service and actions endpoint
//! └── browser.rs  - System browser launcher for action targets
//! ```
//!
//! ## Error Handling
//!
//! Every gateway call returns [`crate::core::Result`]:
//! - Transport failures and undecodable bodies: `AppError::Network`
//! - Error responses: `AppError::Api` carrying the body's `error` message,
//!   or `"Erro"` when absent
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps `reqwest::Client` (internally pooled and thread-safe) and
//! can be shared behind an `Arc`.

pub mod api;
pub mod browser;

pub use api::ApiClient;
pub use browser::SystemBrowser;
