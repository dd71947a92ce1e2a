//! # View Renderers
//!
//! Async functions that fetch what a page needs and build its [`View`].
//! A renderer returning `Err` ends up as the generic error view; renderers
//! that must keep their page on failure (action list, history) put the
//! message inline instead.
//!
//! [`View`]: crate::app::state::View

pub mod actions;
pub mod dashboard;
pub mod history;
pub mod withdrawals;

pub use actions::render_action_list;
pub use dashboard::render_dashboard;
pub use history::{fetch_history, render_history};
pub use withdrawals::render_withdrawals;
