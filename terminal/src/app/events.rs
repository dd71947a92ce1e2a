//! # Application Events
//!
//! Notifications sent from the engine (including its background timers) to
//! the shell so it knows when to redraw. Payloads are deliberately thin: the
//! shell always redraws from [`AppState`](super::AppState), never from an
//! event's copy of it.

/// Engine -> shell notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A navigation committed a new view
    ViewChanged { path: String },
    /// The claim countdown was recomputed
    CountdownTick { seconds_left: u64 },
    /// The claim deadline passed; gated controls are now disabled
    ClaimExpired,
    /// The toast slot changed (shown, replaced or hidden)
    ToastChanged,
    /// An action target was handed to the system browser
    ExternalLinkOpened { url: String },
}
