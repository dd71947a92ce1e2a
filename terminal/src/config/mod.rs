//! # Configuration
//!
//! Two layers of configuration:
//!
//! - [`client::ClientConfig`]: process settings read once from the environment
//!   (service origin, session file path, origin tag, HTTP timeout)
//! - [`session::SessionConfig`]: user settings kept in a persisted key/value
//!   [`ConfigStore`](crate::core::service::ConfigStore), re-read by the gateway
//!   on every request so edits apply immediately
//!
//! ## Session Keys
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `API_BASE_URL` | empty | Base URL override for service paths |
//! | `ACTIONS_API_URL` | `/api/acoes` | Actions endpoint, absolute or service-relative |
//! | `API_TOKEN` | empty | Sent as `X-API-TOKEN` when set |
//! | `USE_NGROK` | `false` | Adds `ngrok-skip-browser-warning: true` |
//! | `SKIP_NOTIFY_SERVER` | `false` | Skip also informs the service |
//! | `CURRENT_CLAIM_ID` | - | Last claim created from the list view |

pub mod client;
pub mod session;
pub mod store;

pub use client::ClientConfig;
pub use session::SessionConfig;
pub use store::{FileConfigStore, MemoryConfigStore};
