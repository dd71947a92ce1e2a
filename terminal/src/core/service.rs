//! # Service Traits
//!
//! Capabilities injected into the engine. Production wiring uses the HTTP
//! gateway, the file-backed session store, the system browser and the system
//! clock; tests substitute in-memory fakes for each.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{
    Ack, ActionLookupRequest, ActionsResponse, ClaimDetails, ClaimId, CreateClaimResponse,
    DashboardResponse, HistoryResponse, PayoutProfile, WithdrawalsResponse,
};

use crate::core::error::Result;

/// Typed operations of the earnings service and the actions endpoint.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `GET /api/dashboard`
    async fn dashboard(&self) -> Result<DashboardResponse>;

    /// `POST /api/acoes` with `acao: "listar"`
    async fn list_actions(&self, origem: &str) -> Result<ActionsResponse>;

    /// `POST /api/claims`
    async fn create_claim(&self, origem: &str) -> Result<CreateClaimResponse>;

    /// `GET /api/claims/{id}`; always hits the service, never a cache
    async fn get_claim(&self, claim_id: &ClaimId) -> Result<ClaimDetails>;

    /// `POST /api/claims/{id}/opened`
    async fn mark_opened(&self, claim_id: &ClaimId) -> Result<Ack>;

    /// `POST /api/claims/{id}/confirm`
    async fn confirm_claim(&self, claim_id: &ClaimId) -> Result<Ack>;

    /// `POST /api/claims/{id}/skip`; only called when skip notification is enabled
    async fn skip_claim(&self, claim_id: &ClaimId) -> Result<Ack>;

    /// `GET /api/historico-acoes?limit=&q=`
    async fn history(&self, limit: u32, query: &str) -> Result<HistoryResponse>;

    /// `GET /api/payout-profile`
    async fn payout_profile(&self) -> Result<PayoutProfile>;

    /// `GET /api/withdraws`
    async fn withdrawals(&self) -> Result<WithdrawalsResponse>;

    /// `POST /api/withdraw`
    async fn request_withdrawal(&self, amount: f64) -> Result<Ack>;

    /// `POST <actions endpoint>`
    async fn lookup_actions(&self, request: &ActionLookupRequest) -> Result<ActionsResponse>;
}

/// Persisted key/value session store.
///
/// Reads and writes are atomic per key; no locking beyond that is required.
pub trait ConfigStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Write several keys; either all of them take effect or none does.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Opens a URL outside the application.
///
/// Fire-and-forget: implementations must return without waiting for the
/// external program.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Wall-clock source for countdowns
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
