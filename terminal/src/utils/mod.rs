//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input parsing for amounts and on/off flags
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (currency formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
