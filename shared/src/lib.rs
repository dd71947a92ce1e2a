//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Ganhar client engine and the
//! earnings service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::common`]**: error bodies, acknowledgements, lenient field decoders
//!   - **[`dto::wallet`]**: dashboard, balances and daily earnings
//!   - **[`dto::actions`]**: available actions and the actions-endpoint lookup
//!   - **[`dto::claims`]**: claim creation, details and confirmation
//!   - **[`dto::history`]**: action history rows
//!   - **[`dto::withdrawals`]**: payout profile and withdrawal records
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_brl`]**: pt-BR currency formatting
//!
//! ## Wire Format
//!
//! Field names follow the service verbatim (Portuguese where the service uses
//! Portuguese, e.g. `saldo_disponivel`, `acoes`, `origem`). Fields the service
//! may omit are `#[serde(default)]` so partial rows still decode.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::claims::ClaimDetails;
//!
//! let claim: ClaimDetails = serde_json::from_str(
//!     r#"{"action_tipo":"seguir","payout_amount":0.01,"expires_at":"2024-05-01T12:00:00","opened_link":0}"#,
//! ).unwrap();
//! assert!(!claim.opened_link);
//! assert!(claim.expires_at_utc().is_some());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
