//! # Application Orchestrator
//!
//! The [`App`] struct ties the router, the view renderers, the claim
//! lifecycle and the toast channel to the injected services.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Shell (stdin commands, redraw on AppEvent)              │
//! │        │ navigate() / handle_*()          ▲              │
//! │  ┌─────▼──────────────────────────────┐   │ async_channel│
//! │  │  App                               │───┘              │
//! │  │  - Router: path -> Route           │                  │
//! │  │  - views::*: Route -> View         │                  │
//! │  │  - countdown: TimerSlot (≤ 1 tick) │                  │
//! │  │  - Notifier: toast slot            │                  │
//! │  └─────┬──────────────────────────────┘                  │
//! │        │                                                 │
//! │  ┌─────▼──────────────────────────────┐                  │
//! │  │  State: Arc<RwLock<AppState>>      │                  │
//! │  └────────────────────────────────────┘                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Navigation
//!
//! Every navigation cancels the countdown first, then bumps
//! `nav_generation`, resolves the path and awaits the renderer. The result is
//! committed only if no newer navigation started meanwhile, and the countdown
//! is armed only for a committed Active claim. Together with the single-slot
//! timer this keeps at most one ticker alive no matter how navigations
//! overlap.
//!
//! ## State Access
//!
//! Locks are taken for the duration of a single read or write and never held
//! across an `.await`.
//!
//! ## Related Modules
//!
//! - [`state`]: view models
//! - [`events`]: engine -> shell notifications
//! - [`router`]: path resolution
//! - [`claim`]: claim lifecycle
//! - [`handlers`]: user actions

pub mod claim;
pub mod events;
mod handlers;
pub mod messages;
pub mod router;
pub mod state;
pub mod timer;
pub mod toast;
pub mod views;

pub use claim::{ButtonIntent, ClaimControl, ClaimPhase, ClaimSession};
pub use events::AppEvent;
pub use router::{Resolution, Route, Router};
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use shared::dto::ClaimId;
use std::sync::Arc;
use tracing::Instrument;

use crate::app::claim::{TickOutcome, TICK_INTERVAL};
use crate::app::messages::MSG_LOGGED_OUT;
use crate::app::router::DEFAULT_PATH;
use crate::app::timer::TimerSlot;
use crate::app::toast::Notifier;
use crate::config::{ClientConfig, FileConfigStore, MemoryConfigStore, SessionConfig};
use crate::core::error::Result;
use crate::core::service::{ApiService, Clock, ConfigStore, LinkOpener, SystemClock};
use crate::debug::trace_context::new_trace_id;
use crate::services::{ApiClient, SystemBrowser};

/// Redirect hops followed by one navigation before giving up
const MAX_REDIRECTS: usize = 4;

/// Injected capabilities
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn ApiService>,
    pub config: Arc<dyn ConfigStore>,
    pub opener: Arc<dyn LinkOpener>,
    pub clock: Arc<dyn Clock>,
}

impl Services {
    /// Production wiring: HTTP gateway, file-backed session, system browser
    /// and wall clock.
    ///
    /// An unreadable session file is logged and replaced by an in-memory
    /// store so the client still starts.
    pub fn from_config(config: &ClientConfig) -> Self {
        let store: Arc<dyn ConfigStore> = match FileConfigStore::open(config.config_path.clone()) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(
                    path = %config.config_path.display(),
                    error = %e,
                    "Failed to open session store, settings will not persist"
                );
                Arc::new(MemoryConfigStore::default())
            }
        };

        let api = ApiClient::new(config, store.clone());

        Self {
            api: Arc::new(api),
            config: store,
            opener: Arc::new(SystemBrowser),
            clock: Arc::new(SystemClock),
        }
    }
}

/// Main application orchestrator.
///
/// Owns the shared state and the two timer slots (countdown and toast). User
/// actions are `async` methods; the shell awaits them one at a time.
pub struct App {
    /// Shared view state; read it to draw
    pub state: Arc<RwLock<AppState>>,

    /// Events for the shell. Background timers send here too.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    services: Services,
    origin_tag: String,
    router: Router,
    countdown: Mutex<TimerSlot>,
    notifier: Notifier,
}

impl App {
    pub fn new(services: Services, origin_tag: impl Into<String>) -> Self {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (event_tx, event_rx) = unbounded();
        let notifier = Notifier::new(state.clone(), event_tx.clone());

        Self {
            state,
            event_rx,
            event_tx,
            services,
            origin_tag: origin_tag.into(),
            router: Router::new(),
            countdown: Mutex::new(TimerSlot::new()),
            notifier,
        }
    }

    /// Snapshot of the committed view
    pub fn view(&self) -> View {
        self.state.read().view.clone()
    }

    /// Resolved path of the committed view
    pub fn current_path(&self) -> String {
        self.state.read().path.clone()
    }

    /// Visible toast message
    pub fn toast(&self) -> Option<String> {
        self.state.read().toast.current().map(str::to_string)
    }

    /// Show a toast
    pub fn notify(&self, message: impl Into<String>) {
        self.notifier.notify(message);
    }

    /// Whether the claim countdown is running
    pub fn countdown_armed(&self) -> bool {
        self.countdown.lock().is_armed()
    }

    /// Countdown tasks not yet released by the runtime
    pub fn live_countdowns(&self) -> usize {
        self.countdown.lock().live_count()
    }

    /// Navigate to `raw_path` (with or without a leading `#`).
    pub async fn navigate(&self, raw_path: &str) {
        let trace_id = new_trace_id();
        let span = tracing::info_span!("navigate", trace_id = %trace_id, path = %raw_path);
        self.navigate_inner(raw_path).instrument(span).await
    }

    async fn navigate_inner(&self, raw_path: &str) {
        let mut target = raw_path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            self.cancel_countdown();
            let generation = {
                let mut state = self.state.write();
                state.nav_generation += 1;
                state.nav_generation
            };

            let route = match self.router.resolve(&target) {
                Resolution::Redirect(to) => {
                    tracing::debug!(from = %target, to = %to, "Redirect");
                    target = to.to_string();
                    continue;
                }
                Resolution::Render(Route::Logout) => {
                    tracing::info!("Logout");
                    self.notify(MSG_LOGGED_OUT);
                    target = DEFAULT_PATH.to_string();
                    continue;
                }
                Resolution::Render(route) => route,
            };

            {
                let mut state = self.state.write();
                state.path = route.path();
                state.active_nav = route.nav_target();
                state.view = View::Loading;
            }

            let view = match self.render(&route).await {
                Ok(view) => view,
                Err(e) => {
                    tracing::warn!(route = ?route, error = %e, "Render failed");
                    View::Error {
                        message: e.user_message().to_string(),
                    }
                }
            };
            self.commit(generation, view);
            return;
        }

        tracing::error!(path = %raw_path, "Too many redirects");
    }

    async fn render(&self, route: &Route) -> Result<View> {
        let api = self.services.api.as_ref();

        let view = match route {
            Route::Dashboard => views::render_dashboard(api).await?,
            Route::Earn => View::Earn,
            Route::InstagramActions => views::render_action_list(api, &self.origin_tag).await,
            Route::ExecuteAction(claim_id) => View::ExecuteAction(
                claim::load_claim(api, self.services.clock.as_ref(), claim_id.clone()).await,
            ),
            Route::History => views::render_history(api).await,
            Route::Withdrawals => views::render_withdrawals(api).await?,
            Route::Settings => View::Settings(SettingsView {
                form: SessionConfig::load(self.services.config.as_ref()),
                dirty: false,
            }),
            Route::Placeholder(path) => View::Placeholder {
                path: path.to_string(),
            },
            Route::Logout => View::Loading,
        };

        Ok(view)
    }

    /// Install `view` if `generation` is still current. Arms the countdown for
    /// an Active claim.
    fn commit(&self, generation: u64, view: View) -> bool {
        let arm_countdown = matches!(&view, View::ExecuteAction(session) if session.is_active());
        let history_error = match &view {
            View::History(history) => history.error.clone(),
            _ => None,
        };

        let path = {
            let mut state = self.state.write();
            if state.nav_generation != generation {
                tracing::debug!(
                    generation,
                    current = state.nav_generation,
                    "Discarding stale render"
                );
                return false;
            }
            state.view = view;
            state.path.clone()
        };

        if arm_countdown {
            self.start_countdown(generation);
        }
        if let Some(message) = history_error {
            self.notify(message);
        }

        tracing::info!(path = %path, "View committed");
        let _ = self.event_tx.try_send(AppEvent::ViewChanged { path });
        true
    }

    fn cancel_countdown(&self) {
        if self.countdown.lock().cancel() {
            tracing::debug!("Countdown cancelled");
        }
    }

    fn start_countdown(&self, generation: u64) {
        let state = self.state.clone();
        let clock = self.services.clock.clone();
        let events = self.event_tx.clone();

        self.countdown.lock().start(
            "claim_countdown",
            run_countdown(state, clock, events, generation),
        );
    }

    /// Claim id of the shown claim and the generation it was committed at,
    /// if `control` is currently enabled. Shows the matching notice otherwise.
    fn claim_for(&self, control: ClaimControl) -> Option<(ClaimId, u64)> {
        let checked = {
            let state = self.state.read();
            match state.claim_session() {
                None => Err(messages::MSG_CLAIM_NOT_ACTIVE),
                Some(session) if !session.controls.is_enabled(control) => {
                    Err(match session.phase {
                        ClaimPhase::Expired => messages::MSG_CLAIM_EXPIRED,
                        _ => messages::MSG_CLAIM_NOT_ACTIVE,
                    })
                }
                Some(session) => Ok((session.claim_id.clone(), state.nav_generation)),
            }
        };

        match checked {
            Ok(claim) => Some(claim),
            Err(message) => {
                self.notify(message);
                None
            }
        }
    }
}

/// Countdown ticker for the claim committed at `generation`.
///
/// Stops on its own once the claim leaves Active or a newer navigation
/// replaced the view.
async fn run_countdown(
    state: Arc<RwLock<AppState>>,
    clock: Arc<dyn Clock>,
    events: Sender<AppEvent>,
    generation: u64,
) {
    let start = tokio::time::Instant::now() + TICK_INTERVAL;
    let mut interval = tokio::time::interval_at(start, TICK_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let now: DateTime<Utc> = clock.now();

        let outcome = {
            let mut state = state.write();
            if state.nav_generation != generation {
                return;
            }
            match state.claim_session_mut() {
                Some(session) => session.tick(now),
                None => return,
            }
        };

        match outcome {
            TickOutcome::Counting(seconds_left) => {
                let _ = events.try_send(AppEvent::CountdownTick { seconds_left });
            }
            TickOutcome::Expired => {
                let _ = events.try_send(AppEvent::CountdownTick { seconds_left: 0 });
                let _ = events.try_send(AppEvent::ClaimExpired);
                return;
            }
            TickOutcome::Idle => return,
        }
    }
}
