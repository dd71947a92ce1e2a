//! # Ganhar Terminal - Library Root
//!
//! Headless client engine for the Ganhar earnings service, plus a terminal
//! shell that drives it. Users browse social-media actions, claim one, open
//! its link, and confirm it before a server-issued deadline; they can also
//! review their action history, withdraw earnings and edit session settings.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  shell        - stdin commands, text redraws           │
//! │  app          - router, views, claim lifecycle, toast  │
//! │  services     - HTTP gateway, system browser           │
//! │  config       - process env + persisted session store  │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (X-API-TOKEN)           │ POST {claim_id, origem, botao}
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Earnings API   │          │   Actions endpoint      │
//! │  /api/*         │          │   (configurable URL)    │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: navigation, view models and user actions
//!   - `router`: ordered path rules with a fallback redirect
//!   - `claim`: Loading → Active → Confirmed / Expired
//!   - `toast`: single-slot notifications with auto-hide
//!   - `timer`: cancellable single-slot timers
//! - **core**: error type and the injected service traits
//! - **services**: `ApiClient` (reqwest) and `SystemBrowser` (open)
//! - **config**: `ClientConfig` from env, `SessionConfig` in a `ConfigStore`
//! - **ui**: plain-text rendering of the state
//! - **debug**: file logging with `tracing`
//!
//! ## Concurrency
//!
//! The binary runs everything on a single-threaded tokio runtime. The only
//! suspension points are network calls and timer ticks, locks are never held
//! across them, and navigation cancels the running countdown before anything
//! else happens.
//!
//! ## Testing
//!
//! Every external effect sits behind a trait in [`core::service`]
//! (`ApiService`, `ConfigStore`, `LinkOpener`, `Clock`), so the engine runs
//! against in-memory fakes under tokio's paused clock.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod shell;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Services, View};
pub use config::{ClientConfig, SessionConfig};
pub use crate::core::error::{AppError, Result};
