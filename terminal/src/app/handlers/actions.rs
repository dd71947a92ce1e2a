use crate::app::messages::MSG_INVALID_ACTION;
use crate::app::router::execute_path;
use crate::app::{App, View};
use crate::config::session::KEY_CURRENT_CLAIM_ID;

impl App {
    /// Claim the action at `index` of the list and open its execute page.
    pub async fn start_action(&self, index: usize) {
        let listed = matches!(
            &self.state.read().view,
            View::ActionList(list) if index < list.actions.len()
        );
        if !listed {
            self.notify(MSG_INVALID_ACTION);
            return;
        }

        match self.services.api.create_claim(&self.origin_tag).await {
            Ok(created) => {
                if let Err(e) = self
                    .services
                    .config
                    .set(KEY_CURRENT_CLAIM_ID, created.claim_id.as_str())
                {
                    tracing::warn!(error = %e, "Failed to remember current claim");
                }
                self.navigate(&execute_path(&created.claim_id)).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create claim failed");
                self.notify(e.user_message());
            }
        }
    }
}
