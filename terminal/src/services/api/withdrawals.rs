//! # Payout and Withdrawal Endpoints

use shared::{Ack, PayoutProfile, WithdrawRequest, WithdrawalsResponse};

use super::client::ApiClient;
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_payout_profile(client: &ApiClient) -> Result<PayoutProfile> {
    client.get("/api/payout-profile").await
}

#[tracing::instrument(skip(client))]
pub async fn list_withdrawals(client: &ApiClient) -> Result<WithdrawalsResponse> {
    client.get("/api/withdraws").await
}

/// Request a withdrawal; minimum amount and balance are enforced server-side.
#[tracing::instrument(skip(client))]
pub async fn request_withdrawal(client: &ApiClient, amount: f64) -> Result<Ack> {
    let ack: Ack = client.post("/api/withdraw", &WithdrawRequest { amount }).await?;
    tracing::info!(amount, "Withdrawal requested");
    Ok(ack)
}
