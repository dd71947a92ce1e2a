//! # Action History Endpoint

use shared::HistoryResponse;

use super::client::ApiClient;
use crate::core::error::Result;

/// Latest actions, filtered by a free-text query (id, username or validity).
#[tracing::instrument(skip(client))]
pub async fn get_history(client: &ApiClient, limit: u32, query: &str) -> Result<HistoryResponse> {
    client
        .get_with_query(
            "/api/historico-acoes",
            &[("limit", limit.to_string()), ("q", query.to_string())],
        )
        .await
}
