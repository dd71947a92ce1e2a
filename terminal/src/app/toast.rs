//! Toast notification channel
//!
//! One slot, newest message wins. Every `notify` restarts the auto-hide
//! delay, and the hide timer lives in a [`TimerSlot`] so only one is ever
//! pending.

use async_channel::Sender;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::timer::TimerSlot;

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(2400);

pub struct Notifier {
    state: Arc<RwLock<AppState>>,
    events: Sender<AppEvent>,
    hide_timer: Mutex<TimerSlot>,
}

impl Notifier {
    pub fn new(state: Arc<RwLock<AppState>>, events: Sender<AppEvent>) -> Self {
        Self {
            state,
            events,
            hide_timer: Mutex::new(TimerSlot::new()),
        }
    }

    /// Show `message`, replacing whatever is visible
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(message = %message, "Toast");

        let generation = self.state.write().toast.show(message);
        let _ = self.events.try_send(AppEvent::ToastChanged);

        let state = self.state.clone();
        let events = self.events.clone();
        self.hide_timer.lock().start("toast_hide", async move {
            tokio::time::sleep(TOAST_DURATION).await;
            let hidden = state.write().toast.hide_if_current(generation);
            if hidden {
                let _ = events.try_send(AppEvent::ToastChanged);
            }
        });
    }

    /// Pending hide timers, for leak checks
    pub fn pending_timers(&self) -> usize {
        self.hide_timer.lock().live_count()
    }
}
