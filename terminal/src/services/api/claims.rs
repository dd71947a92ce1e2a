//! # Claim Endpoints

use shared::{Ack, ClaimDetails, ClaimId, ConfirmClaimRequest, CreateClaimRequest, CreateClaimResponse};

use super::client::ApiClient;
use crate::core::error::Result;

/// Claim the next available action for an origin.
#[tracing::instrument(skip(client))]
pub async fn create_claim(client: &ApiClient, origem: &str) -> Result<CreateClaimResponse> {
    let request = CreateClaimRequest {
        origem: origem.to_string(),
    };
    let response: CreateClaimResponse = client.post("/api/claims", &request).await?;
    tracing::info!(claim_id = %response.claim_id, "Claim created");
    Ok(response)
}

/// Fetch the authoritative copy of a claim.
#[tracing::instrument(skip(client, claim_id), fields(claim_id = %claim_id))]
pub async fn get_claim(client: &ApiClient, claim_id: &ClaimId) -> Result<ClaimDetails> {
    client.get(&format!("/api/claims/{claim_id}")).await
}

/// Record that the claim's link was opened.
#[tracing::instrument(skip(client, claim_id), fields(claim_id = %claim_id))]
pub async fn mark_opened(client: &ApiClient, claim_id: &ClaimId) -> Result<Ack> {
    client
        .post(&format!("/api/claims/{claim_id}/opened"), &serde_json::json!({}))
        .await
}

/// Submit the claim for review.
#[tracing::instrument(skip(client, claim_id), fields(claim_id = %claim_id))]
pub async fn confirm_claim(client: &ApiClient, claim_id: &ClaimId) -> Result<Ack> {
    client
        .post(
            &format!("/api/claims/{claim_id}/confirm"),
            &ConfirmClaimRequest { opened_link: true },
        )
        .await
}

/// Tell the service the claim was skipped.
#[tracing::instrument(skip(client, claim_id), fields(claim_id = %claim_id))]
pub async fn skip_claim(client: &ApiClient, claim_id: &ClaimId) -> Result<Ack> {
    client
        .post(&format!("/api/claims/{claim_id}/skip"), &serde_json::json!({}))
        .await
}
