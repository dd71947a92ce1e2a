//! # Action Inventory Endpoints
//!
//! The service's own listing route and the separately configured actions
//! endpoint consulted right before a claim's link is opened.

use shared::{ActionLookupRequest, ActionsResponse, ListActionsRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Browse available actions for an origin.
#[tracing::instrument(skip(client))]
pub async fn list_actions(client: &ApiClient, origem: &str) -> Result<ActionsResponse> {
    let response: ActionsResponse = client
        .post("/api/acoes", &ListActionsRequest::listar(origem))
        .await?;
    tracing::info!(count = response.acoes.len(), "Fetched action inventory");
    Ok(response)
}

/// Ask the actions endpoint which actions are compatible with a pressed button.
#[tracing::instrument(skip(client, request), fields(botao = %request.botao))]
pub async fn lookup_actions(
    client: &ApiClient,
    request: &ActionLookupRequest,
) -> Result<ActionsResponse> {
    client.post_actions(request).await
}
