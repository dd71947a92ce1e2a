//! # Dashboard Endpoint

use shared::DashboardResponse;

use super::client::ApiClient;
use crate::core::error::Result;

/// Wallet balances, user greeting and daily earnings.
#[tracing::instrument(skip(client))]
pub async fn get_dashboard(client: &ApiClient) -> Result<DashboardResponse> {
    client.get("/api/dashboard").await
}
