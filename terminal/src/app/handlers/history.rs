use crate::app::messages::{MSG_INVALID_LIMIT, MSG_NOT_ON_VIEW};
use crate::app::state::HISTORY_LIMITS;
use crate::app::views::fetch_history;
use crate::app::{App, AppEvent, View};

impl App {
    /// Reload the history page with a new limit and query.
    ///
    /// On failure the page keeps its previous rows, shows the error inline
    /// and toasts it.
    pub async fn search_history(&self, limit: u32, query: &str) {
        if !HISTORY_LIMITS.contains(&limit) {
            self.notify(MSG_INVALID_LIMIT);
            return;
        }

        let generation = {
            let state = self.state.read();
            matches!(state.view, View::History(_)).then_some(state.nav_generation)
        };
        let Some(generation) = generation else {
            self.notify(MSG_NOT_ON_VIEW);
            return;
        };

        let result = fetch_history(self.services.api.as_ref(), limit, query).await;

        let failure = {
            let mut state = self.state.write();
            if state.nav_generation != generation {
                return;
            }
            let View::History(history) = &mut state.view else {
                return;
            };
            history.limit = limit;
            history.query = query.trim().to_string();
            match result {
                Ok(items) => {
                    history.items = items;
                    history.error = None;
                    None
                }
                Err(e) => {
                    tracing::warn!(limit, error = %e, "History search failed");
                    let message = e.user_message().to_string();
                    history.error = Some(message.clone());
                    Some(message)
                }
            }
        };

        if let Some(message) = failure {
            self.notify(message);
        }
        let path = self.current_path();
        let _ = self.event_tx.try_send(AppEvent::ViewChanged { path });
    }
}
