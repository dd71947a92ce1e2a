//! Action history page

use shared::dto::HistoryItem;

use crate::app::state::{HistoryView, View};
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Fetch one page of history
pub async fn fetch_history(api: &dyn ApiService, limit: u32, query: &str) -> Result<Vec<HistoryItem>> {
    let response = api.history(limit, query.trim()).await?;
    Ok(response.items)
}

/// Initial render with the default filters. A failure keeps the page with an
/// inline error; the caller also toasts it.
pub async fn render_history(api: &dyn ApiService) -> View {
    let mut view = HistoryView::default();
    match fetch_history(api, view.limit, &view.query).await {
        Ok(items) => view.items = items,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load history");
            view.error = Some(e.user_message().to_string());
        }
    }
    View::History(view)
}
