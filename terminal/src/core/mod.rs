//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Injected capabilities (`ApiService`, `ConfigStore`,
//!   `LinkOpener`, `Clock`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use ganhar_terminal::core::service::ApiService;
//!
//! // In production: the HTTP gateway
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(client_config, store));
//!
//! // In tests: an in-memory fake
//! let api: Arc<dyn ApiService> = Arc::new(FakeApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ApiService, Clock, ConfigStore, LinkOpener, SystemClock};
