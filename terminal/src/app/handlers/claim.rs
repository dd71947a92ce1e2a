//! Execute-action page handlers

use crate::app::claim::{self, ButtonIntent, ClaimControl, ConfirmOutcome};
use crate::app::messages::{
    MSG_CLAIM_SKIPPED, MSG_CLAIM_SUBMITTED, MSG_OPENING_LINK, MSG_OPEN_LINK_FIRST,
};
use crate::app::router::{ACTIONS_PATH, DEFAULT_PATH};
use crate::app::{App, AppEvent};
use crate::config::SessionConfig;

impl App {
    /// "Acessar perfil"
    pub async fn open_profile(&self) {
        self.open_claim_link(ButtonIntent::Profile).await;
    }

    /// "Acesso direto"
    pub async fn open_direct(&self) {
        self.open_claim_link(ButtonIntent::Direct).await;
    }

    async fn open_claim_link(&self, intent: ButtonIntent) {
        let Some((claim_id, _)) = self.claim_for(intent.control()) else {
            return;
        };

        let result = claim::open_link(
            self.services.api.as_ref(),
            self.services.opener.as_ref(),
            &claim_id,
            &self.origin_tag,
            intent,
        )
        .await;

        match result {
            Ok(action) => {
                let _ = self.event_tx.try_send(AppEvent::ExternalLinkOpened {
                    url: action.target_url,
                });
                self.notify(MSG_OPENING_LINK);
            }
            Err(e) => {
                tracing::warn!(claim_id = %claim_id, intent = ?intent, error = %e, "Open link failed");
                self.notify(e.user_message());
            }
        }
    }

    /// "Confirmar": re-reads the claim and confirms only once its link was opened
    pub async fn confirm_claim(&self) {
        let Some((claim_id, generation)) = self.claim_for(ClaimControl::Confirm) else {
            return;
        };

        match claim::confirm(self.services.api.as_ref(), &claim_id).await {
            Ok(ConfirmOutcome::LinkNotOpened) => self.notify(MSG_OPEN_LINK_FIRST),
            Ok(ConfirmOutcome::Submitted) => {
                {
                    let mut state = self.state.write();
                    if state.nav_generation == generation {
                        if let Some(session) = state.claim_session_mut() {
                            session.mark_confirmed();
                        }
                    }
                }
                self.notify(MSG_CLAIM_SUBMITTED);
                self.navigate(DEFAULT_PATH).await;
            }
            Err(e) => {
                tracing::warn!(claim_id = %claim_id, error = %e, "Confirm failed");
                self.notify(e.user_message());
            }
        }
    }

    /// "Pular": back to the action list. Tells the server only when
    /// `SKIP_NOTIFY_SERVER` is on, and ignores its failures.
    pub async fn skip_claim(&self) {
        let Some((claim_id, _)) = self.claim_for(ClaimControl::Skip) else {
            return;
        };

        let session = SessionConfig::load(self.services.config.as_ref());
        if session.skip_notify_server {
            if let Err(e) = self.services.api.skip_claim(&claim_id).await {
                tracing::warn!(claim_id = %claim_id, error = %e, "Skip notification failed");
            }
        }

        tracing::info!(claim_id = %claim_id, "Claim skipped");
        self.notify(MSG_CLAIM_SKIPPED);
        self.navigate(ACTIONS_PATH).await;
    }
}
