//! Session configuration persisted in the key/value store

use crate::core::error::Result;
use crate::core::service::ConfigStore;

pub const KEY_API_BASE_URL: &str = "API_BASE_URL";
pub const KEY_ACTIONS_API_URL: &str = "ACTIONS_API_URL";
pub const KEY_API_TOKEN: &str = "API_TOKEN";
pub const KEY_USE_NGROK: &str = "USE_NGROK";
pub const KEY_SKIP_NOTIFY_SERVER: &str = "SKIP_NOTIFY_SERVER";
pub const KEY_CURRENT_CLAIM_ID: &str = "CURRENT_CLAIM_ID";

/// Default actions endpoint: the service's own inventory route
pub const DEFAULT_ACTIONS_URL: &str = "/api/acoes";

/// Snapshot of the user-editable settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub base_url: String,
    pub actions_url: String,
    pub token: String,
    pub use_ngrok: bool,
    pub skip_notify_server: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            actions_url: DEFAULT_ACTIONS_URL.to_string(),
            token: String::new(),
            use_ngrok: false,
            skip_notify_server: false,
        }
    }
}

impl SessionConfig {
    /// Read every key fresh from the store
    pub fn load(store: &dyn ConfigStore) -> Self {
        let flag = |key: &str| store.get(key).map(|v| v == "true").unwrap_or(false);
        Self {
            base_url: store.get(KEY_API_BASE_URL).unwrap_or_default(),
            actions_url: store
                .get(KEY_ACTIONS_API_URL)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ACTIONS_URL.to_string()),
            token: store.get(KEY_API_TOKEN).unwrap_or_default(),
            use_ngrok: flag(KEY_USE_NGROK),
            skip_notify_server: flag(KEY_SKIP_NOTIFY_SERVER),
        }
    }

    /// Persist all keys, trimming text values
    pub fn save(&self, store: &dyn ConfigStore) -> Result<()> {
        store.set_all(&[
            (KEY_API_BASE_URL, self.base_url.trim()),
            (KEY_ACTIONS_API_URL, self.actions_url.trim()),
            (KEY_API_TOKEN, self.token.trim()),
            (KEY_USE_NGROK, bool_str(self.use_ngrok)),
            (KEY_SKIP_NOTIFY_SERVER, bool_str(self.skip_notify_server)),
        ])
    }

    /// Token to send, if any
    pub fn token(&self) -> Option<&str> {
        Some(self.token.trim()).filter(|t| !t.is_empty())
    }

    /// Base URL override, if any
    pub fn base_url(&self) -> Option<&str> {
        Some(self.base_url.trim().trim_end_matches('/')).filter(|b| !b.is_empty())
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
