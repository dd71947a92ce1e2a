//! # Logging and Tracing
//!
//! File-based structured logging for the Ganhar client. The terminal itself
//! is the UI, so nothing is written to stdout; everything goes to
//! `logs/ganhar-client.log` (daily rotation).
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Keep the guard alive for the whole program
//! let _log_guard = ganhar_terminal::debug::init();
//!
//! tracing::info!(endpoint = "/api/dashboard", duration_ms = 120, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: filter (default `ganhar_terminal=info,warn`)
//! - `GANHAR_LOG_DIR`: log directory (default `logs`)
//! - `GANHAR_LOG_JSON`: `1` writes JSON lines instead of text

pub mod config;
pub mod logger;
pub mod trace_context;

pub use config::LogConfig;
pub use logger::init;
pub use trace_context::new_trace_id;
