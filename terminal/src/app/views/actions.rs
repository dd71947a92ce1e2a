//! Instagram action list

use crate::app::state::{ActionListView, View, NOMINAL_ACTION_PAYOUT};
use crate::core::service::ApiService;

/// List the available actions for `origem`.
///
/// Never fails: a fetch error is shown inline on the page.
pub async fn render_action_list(api: &dyn ApiService, origem: &str) -> View {
    let view = match api.list_actions(origem).await {
        Ok(response) => {
            let total = response.acoes.len();
            let actions: Vec<_> = response
                .acoes
                .into_iter()
                .filter(|a| a.is_actionable())
                .collect();
            if actions.len() < total {
                tracing::debug!(dropped = total - actions.len(), "Dropped incomplete actions");
            }
            ActionListView {
                actions,
                payout: NOMINAL_ACTION_PAYOUT,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(origem = %origem, error = %e, "Failed to list actions");
            ActionListView {
                actions: Vec::new(),
                payout: NOMINAL_ACTION_PAYOUT,
                error: Some(format!("Erro ao buscar ações: {}", e.user_message())),
            }
        }
    };

    View::ActionList(view)
}
