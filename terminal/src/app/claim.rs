//! # Claim Lifecycle
//!
//! State machine for one claimed action:
//!
//! ```text
//! Loading ──fetch ok──▶ Active ──confirm ok──▶ Confirmed
//!    │                    │
//!    └──fetch failed──▶ LoadFailed   └──deadline──▶ Expired
//! ```
//!
//! The countdown is recomputed from the absolute deadline on every tick, so a
//! missed tick only delays the display. Opening a link never changes the phase;
//! it flips the server-side opened flag that [`confirm`] re-reads before posting.

use chrono::{DateTime, Utc};
use shared::dto::{ActionItem, ActionLookupRequest, ClaimDetails, ClaimId};
use std::time::Duration;

use crate::app::messages::{MSG_INVALID_DEADLINE, MSG_NO_COMPATIBLE_ACTION};
use crate::core::error::{AppError, Result};
use crate::core::service::{ApiService, Clock, LinkOpener};

/// Countdown tick period
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Whole seconds until `deadline`, floored and clamped at zero
pub fn remaining_seconds(deadline: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (deadline - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis / 1000) as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimPhase {
    Loading,
    Active,
    Confirmed,
    Expired,
    LoadFailed,
}

/// Interactive controls of the execute-action view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimControl {
    AccessProfile,
    DirectAccess,
    Confirm,
    Skip,
}

/// Enabled state of each control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimControls {
    pub access_profile: bool,
    pub direct_access: bool,
    pub confirm: bool,
    pub skip: bool,
}

impl ClaimControls {
    fn all_enabled() -> Self {
        Self {
            access_profile: true,
            direct_access: true,
            confirm: true,
            skip: true,
        }
    }

    fn none() -> Self {
        Self {
            access_profile: false,
            direct_access: false,
            confirm: false,
            skip: false,
        }
    }

    pub fn is_enabled(&self, control: ClaimControl) -> bool {
        match control {
            ClaimControl::AccessProfile => self.access_profile,
            ClaimControl::DirectAccess => self.direct_access,
            ClaimControl::Confirm => self.confirm,
            ClaimControl::Skip => self.skip,
        }
    }
}

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still active with this many seconds left
    Counting(u64),
    /// This tick moved the claim to Expired
    Expired,
    /// Not active; the ticker should stop
    Idle,
}

/// View model of the execute-action page
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSession {
    pub claim_id: ClaimId,
    pub phase: ClaimPhase,
    pub details: Option<ClaimDetails>,
    pub seconds_left: u64,
    pub controls: ClaimControls,
    pub expiry_notice: bool,
    pub error: Option<String>,
    deadline: Option<DateTime<Utc>>,
    expiry_transitions: u32,
}

impl ClaimSession {
    pub fn loading(claim_id: ClaimId) -> Self {
        Self {
            claim_id,
            phase: ClaimPhase::Loading,
            details: None,
            seconds_left: 0,
            controls: ClaimControls::none(),
            expiry_notice: false,
            error: None,
            deadline: None,
            expiry_transitions: 0,
        }
    }

    pub fn failed(claim_id: ClaimId, message: impl Into<String>) -> Self {
        Self {
            phase: ClaimPhase::LoadFailed,
            error: Some(message.into()),
            ..Self::loading(claim_id)
        }
    }

    /// Enter Active from freshly fetched details and run the first tick.
    ///
    /// An unreadable deadline is a load failure. A deadline already in the past
    /// goes straight to Expired.
    pub fn activate(claim_id: ClaimId, details: ClaimDetails, now: DateTime<Utc>) -> Self {
        let Some(deadline) = details.expires_at_utc() else {
            tracing::warn!(claim_id = %claim_id, expires_at = %details.expires_at, "Unreadable claim deadline");
            return Self::failed(claim_id, MSG_INVALID_DEADLINE);
        };

        let mut session = Self {
            phase: ClaimPhase::Active,
            details: Some(details),
            controls: ClaimControls::all_enabled(),
            deadline: Some(deadline),
            seconds_left: remaining_seconds(deadline, now),
            ..Self::loading(claim_id)
        };
        session.tick(now);
        session
    }

    pub fn is_active(&self) -> bool {
        self.phase == ClaimPhase::Active
    }

    /// How many times this session entered Expired (0 or 1)
    pub fn expiry_transitions(&self) -> u32 {
        self.expiry_transitions
    }

    /// Recompute the countdown from the wall clock.
    ///
    /// The displayed value never increases, so a clock stepping backwards
    /// cannot extend the claim on screen.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let Some(deadline) = self.deadline.filter(|_| self.is_active()) else {
            return TickOutcome::Idle;
        };

        let remaining = remaining_seconds(deadline, now).min(self.seconds_left);
        self.seconds_left = remaining;

        if remaining == 0 {
            self.expire();
            TickOutcome::Expired
        } else {
            TickOutcome::Counting(remaining)
        }
    }

    fn expire(&mut self) {
        self.phase = ClaimPhase::Expired;
        self.seconds_left = 0;
        self.controls = ClaimControls {
            skip: true,
            ..ClaimControls::none()
        };
        self.expiry_notice = true;
        self.expiry_transitions += 1;
        tracing::info!(claim_id = %self.claim_id, "Claim expired");
    }

    pub fn mark_confirmed(&mut self) {
        if self.is_active() {
            self.phase = ClaimPhase::Confirmed;
            self.controls = ClaimControls::none();
            tracing::info!(claim_id = %self.claim_id, "Claim confirmed");
        }
    }
}

/// Which open-link control the user pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIntent {
    Profile,
    Direct,
}

const PROFILE_TYPES: &[&str] = &[
    "seguir",
    "perfil",
    "acessar_perfil",
    "follow",
    "profile",
    "access-profile",
];

const DIRECT_TYPES: &[&str] = &[
    "curtir",
    "comentar",
    "visualizar",
    "acesso_direto",
    "direto",
    "like",
    "comment",
    "view",
    "direct-access",
    "direct",
];

impl ButtonIntent {
    /// Tag sent to the actions endpoint
    pub fn botao(&self) -> &'static str {
        match self {
            ButtonIntent::Profile => "acessar_perfil",
            ButtonIntent::Direct => "acesso_direto",
        }
    }

    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            ButtonIntent::Profile => PROFILE_TYPES,
            ButtonIntent::Direct => DIRECT_TYPES,
        }
    }

    pub fn accepts(&self, tipo: &str) -> bool {
        let tipo = tipo.trim();
        self.allowed_types()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(tipo))
    }

    pub fn control(&self) -> ClaimControl {
        match self {
            ButtonIntent::Profile => ClaimControl::AccessProfile,
            ButtonIntent::Direct => ClaimControl::DirectAccess,
        }
    }
}

/// First action in list order whose type the intent accepts
pub fn select_action(actions: &[ActionItem], intent: ButtonIntent) -> Option<&ActionItem> {
    actions
        .iter()
        .find(|action| intent.accepts(&action.tipo) && !action.target_url.trim().is_empty())
}

/// Fetch a claim and build its session
pub async fn load_claim(api: &dyn ApiService, clock: &dyn Clock, claim_id: ClaimId) -> ClaimSession {
    match api.get_claim(&claim_id).await {
        Ok(details) => {
            let session = ClaimSession::activate(claim_id, details, clock.now());
            tracing::info!(
                claim_id = %session.claim_id,
                phase = ?session.phase,
                seconds_left = session.seconds_left,
                "Claim loaded"
            );
            session
        }
        Err(e) => {
            tracing::warn!(claim_id = %claim_id, error = %e, "Failed to load claim");
            ClaimSession::failed(claim_id, e.user_message())
        }
    }
}

/// Look up a compatible action, open it externally and mark the claim opened.
///
/// Returns the action that was opened.
pub async fn open_link(
    api: &dyn ApiService,
    opener: &dyn LinkOpener,
    claim_id: &ClaimId,
    origem: &str,
    intent: ButtonIntent,
) -> Result<ActionItem> {
    let request = ActionLookupRequest {
        claim_id: claim_id.to_json(),
        origem: origem.to_string(),
        botao: intent.botao().to_string(),
    };
    let response = api.lookup_actions(&request).await?;

    let action = select_action(&response.acoes, intent)
        .cloned()
        .ok_or_else(|| AppError::Validation(MSG_NO_COMPATIBLE_ACTION.to_string()))?;

    tracing::info!(
        claim_id = %claim_id,
        intent = ?intent,
        tipo = %action.tipo,
        "Opening action link"
    );
    opener.open(&action.target_url);
    api.mark_opened(claim_id).await?;

    Ok(action)
}

/// Outcome of a confirm attempt that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Submitted,
    /// The server has not seen the link opened; nothing was posted
    LinkNotOpened,
}

/// Re-fetch the claim and confirm it only if its link was opened
pub async fn confirm(api: &dyn ApiService, claim_id: &ClaimId) -> Result<ConfirmOutcome> {
    let fresh = api.get_claim(claim_id).await?;
    if !fresh.opened_link {
        tracing::info!(claim_id = %claim_id, "Confirm rejected: link not opened");
        return Ok(ConfirmOutcome::LinkNotOpened);
    }

    api.confirm_claim(claim_id).await?;
    Ok(ConfirmOutcome::Submitted)
}
