//! # Text Rendering
//!
//! Turns [`AppState`] into plain text for the terminal shell. Rendering is a
//! pure function of the state snapshot.
//!
//! ## Layout
//!
//! ```text
//! ── Ganhar ──────────────────────────────
//!  [Dashboard]  Ganhar  Histórico ...      <- menu, active entry bracketed
//! ── Dashboard ───────────────────────────
//!  ...view body...
//! » Salvo!                                 <- toast, when visible
//! ```

pub mod screens;
pub mod widgets;

use crate::app::AppState;

/// Render the whole screen
pub fn render(state: &AppState) -> String {
    let mut lines = Vec::new();
    lines.push(widgets::rule("Ganhar"));
    lines.push(widgets::nav_bar(state.active_nav));
    lines.push(widgets::rule(state.view.title()));
    lines.extend(screens::render_view(&state.view));
    if let Some(message) = state.toast.current() {
        lines.push(String::new());
        lines.push(widgets::toast(message));
    }
    lines.join("\n")
}
