//! In-memory fakes for driving the engine without a network

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use ganhar_terminal::app::Services;
use ganhar_terminal::config::MemoryConfigStore;
use ganhar_terminal::core::service::{ApiService, Clock, LinkOpener};
use ganhar_terminal::{App, AppError, Result};
use shared::dto::{
    Ack, ActionItem, ActionLookupRequest, ActionsResponse, ClaimDetails, ClaimId,
    CreateClaimResponse, DashboardResponse, HistoryItem, HistoryResponse, PayoutProfile,
    WithdrawalsResponse,
};

/// Wall-clock time at which every test starts
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// Wall clock that follows tokio's (pausable) clock
pub struct TokioClock {
    origin: tokio::time::Instant,
    wall: DateTime<Utc>,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
            wall: epoch(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        self.wall + chrono::Duration::from_std(self.origin.elapsed()).unwrap()
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.lock().push(url.to_string());
    }
}

pub fn action(tipo: &str) -> ActionItem {
    ActionItem {
        tipo: tipo.to_string(),
        target_url: format!("https://instagram.com/p/{}", tipo),
    }
}

/// Claim details expiring `secs` after [`epoch`]
pub fn claim_expiring_in(id: &str, secs: i64, opened_link: bool) -> ClaimDetails {
    let expires = epoch() + chrono::Duration::seconds(secs);
    ClaimDetails {
        id: Some(ClaimId::new(id)),
        action_tipo: Some("seguir".to_string()),
        action_target_url: Some("https://instagram.com/p/seguir".to_string()),
        payout_amount: 0.01,
        expires_at: expires.format("%Y-%m-%dT%H:%M:%S").to_string(),
        opened_link,
        status: None,
    }
}

/// Scriptable [`ApiService`] that records every call
#[derive(Default)]
pub struct FakeApi {
    pub dashboard: Mutex<DashboardResponse>,
    pub listed: Mutex<Vec<ActionItem>>,
    pub lookup: Mutex<Vec<ActionItem>>,
    pub claims: Mutex<HashMap<String, ClaimDetails>>,
    pub claim_delays: Mutex<HashMap<String, Duration>>,
    pub history: Mutex<Vec<HistoryItem>>,
    pub payout: Mutex<PayoutProfile>,
    pub next_claim: Mutex<i64>,
    /// Operation names that fail with an API error
    pub failing: Mutex<HashSet<&'static str>>,
    pub calls: Mutex<Vec<String>>,
    pub lookups: Mutex<Vec<ActionLookupRequest>>,
    pub withdrawals_requested: Mutex<Vec<f64>>,
}

impl FakeApi {
    pub fn with_claim(self, details: ClaimDetails) -> Self {
        let id = details.id.clone().map(|id| id.to_string()).unwrap_or_default();
        self.claims.lock().insert(id, details);
        self
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().insert(op);
    }

    pub fn calls_to(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == op).count()
    }

    fn record(&self, op: &'static str) -> Result<()> {
        self.calls.lock().push(op.to_string());
        if self.failing.lock().contains(op) {
            return Err(AppError::Api(format!("{} falhou", op)));
        }
        Ok(())
    }
}

#[async_trait]
impl ApiService for FakeApi {
    async fn dashboard(&self) -> Result<DashboardResponse> {
        self.record("dashboard")?;
        Ok(self.dashboard.lock().clone())
    }

    async fn list_actions(&self, _origem: &str) -> Result<ActionsResponse> {
        self.record("list_actions")?;
        Ok(ActionsResponse {
            acoes: self.listed.lock().clone(),
        })
    }

    async fn create_claim(&self, _origem: &str) -> Result<CreateClaimResponse> {
        self.record("create_claim")?;
        let id = {
            let mut next = self.next_claim.lock();
            *next += 1;
            *next
        };
        let claim_id = ClaimId::new(id.to_string());
        self.claims
            .lock()
            .insert(claim_id.to_string(), claim_expiring_in(&claim_id.to_string(), 120, false));
        Ok(CreateClaimResponse {
            claim_id,
            expires_at: None,
        })
    }

    async fn get_claim(&self, claim_id: &ClaimId) -> Result<ClaimDetails> {
        self.record("get_claim")?;
        let delay = self.claim_delays.lock().get(claim_id.as_str()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.claims
            .lock()
            .get(claim_id.as_str())
            .cloned()
            .ok_or_else(|| AppError::Api("Claim não encontrado".to_string()))
    }

    async fn mark_opened(&self, claim_id: &ClaimId) -> Result<Ack> {
        self.record("mark_opened")?;
        if let Some(claim) = self.claims.lock().get_mut(claim_id.as_str()) {
            claim.opened_link = true;
        }
        Ok(Ack::default())
    }

    async fn confirm_claim(&self, _claim_id: &ClaimId) -> Result<Ack> {
        self.record("confirm_claim")?;
        Ok(Ack::default())
    }

    async fn skip_claim(&self, _claim_id: &ClaimId) -> Result<Ack> {
        self.record("skip_claim")?;
        Ok(Ack::default())
    }

    async fn history(&self, limit: u32, _query: &str) -> Result<HistoryResponse> {
        self.record("history")?;
        let items = self.history.lock().iter().take(limit as usize).cloned().collect();
        Ok(HistoryResponse { items })
    }

    async fn payout_profile(&self) -> Result<PayoutProfile> {
        self.record("payout_profile")?;
        Ok(self.payout.lock().clone())
    }

    async fn withdrawals(&self) -> Result<WithdrawalsResponse> {
        self.record("withdrawals")?;
        Ok(WithdrawalsResponse::default())
    }

    async fn request_withdrawal(&self, amount: f64) -> Result<Ack> {
        self.record("request_withdrawal")?;
        self.withdrawals_requested.lock().push(amount);
        Ok(Ack::default())
    }

    async fn lookup_actions(&self, request: &ActionLookupRequest) -> Result<ActionsResponse> {
        self.record("lookup_actions")?;
        self.lookups.lock().push(request.clone());
        Ok(ActionsResponse {
            acoes: self.lookup.lock().clone(),
        })
    }
}

pub struct Harness {
    pub app: App,
    pub api: Arc<FakeApi>,
    pub opener: Arc<RecordingOpener>,
    pub store: Arc<MemoryConfigStore>,
}

pub fn harness(api: FakeApi) -> Harness {
    harness_with_store(api, MemoryConfigStore::default())
}

pub fn harness_with_store(api: FakeApi, store: MemoryConfigStore) -> Harness {
    let api = Arc::new(api);
    let opener = Arc::new(RecordingOpener::default());
    let store = Arc::new(store);

    let services = Services {
        api: api.clone(),
        config: store.clone(),
        opener: opener.clone(),
        clock: Arc::new(TokioClock::new()),
    };

    Harness {
        app: App::new(services, "instagram"),
        api,
        opener,
        store,
    }
}

/// Let aborted tasks be released
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
