//! # Settings Handlers
//!
//! Edits go to the pending form on the settings page; nothing reaches the
//! session store until [`App::save_settings`].

use crate::app::messages::{MSG_NOT_ON_VIEW, MSG_SETTINGS_SAVED};
use crate::app::{App, AppEvent, View};
use crate::config::session::{
    KEY_ACTIONS_API_URL, KEY_API_BASE_URL, KEY_API_TOKEN, KEY_SKIP_NOTIFY_SERVER, KEY_USE_NGROK,
};
use crate::core::error::{AppError, Result};
use crate::utils::validation::parse_flag;

impl App {
    /// Set one field of the pending settings form
    pub fn edit_setting(&self, key: &str, value: &str) {
        if let Err(e) = self.apply_setting(key, value) {
            self.notify(e.user_message());
            return;
        }
        let path = self.current_path();
        let _ = self.event_tx.try_send(AppEvent::ViewChanged { path });
    }

    fn apply_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.write();
        let View::Settings(settings) = &mut state.view else {
            return Err(AppError::Validation(MSG_NOT_ON_VIEW.to_string()));
        };

        let form = &mut settings.form;
        match key.to_ascii_uppercase().as_str() {
            KEY_API_BASE_URL => form.base_url = value.to_string(),
            KEY_ACTIONS_API_URL => form.actions_url = value.to_string(),
            KEY_API_TOKEN => form.token = value.to_string(),
            KEY_USE_NGROK => form.use_ngrok = flag(value)?,
            KEY_SKIP_NOTIFY_SERVER => form.skip_notify_server = flag(value)?,
            _ => return Err(AppError::Validation(format!("Chave desconhecida: {}", key))),
        }
        settings.dirty = true;
        Ok(())
    }

    /// Persist the pending form
    pub fn save_settings(&self) {
        let form = match &self.state.read().view {
            View::Settings(settings) => Some(settings.form.clone()),
            _ => None,
        };
        let Some(form) = form else {
            self.notify(MSG_NOT_ON_VIEW);
            return;
        };

        match form.save(self.services.config.as_ref()) {
            Ok(()) => {
                if let View::Settings(settings) = &mut self.state.write().view {
                    settings.dirty = false;
                }
                tracing::info!("Settings saved");
                self.notify(MSG_SETTINGS_SAVED);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save settings");
                self.notify(e.user_message());
            }
        }
    }
}

fn flag(value: &str) -> Result<bool> {
    parse_flag(value).ok_or_else(|| AppError::Validation(format!("Valor inválido: {}", value)))
}
