//! # Action Handlers
//!
//! User actions, organized by page. Each handler reports its outcome through
//! the toast channel and never propagates an error to the shell.

mod actions;
mod claim;
mod history;
mod settings;
mod withdrawals;
