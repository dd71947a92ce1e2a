//! # Application State Types
//!
//! Everything the shell draws from: the committed view, the highlighted menu
//! entry, the toast slot and the navigation generation used to discard stale
//! renders.

use shared::dto::{ActionItem, DailyEarning, HistoryItem, PayoutProfile, WithdrawalItem};

use crate::app::claim::ClaimSession;
use crate::app::router::DEFAULT_PATH;
use crate::config::SessionConfig;

/// History page size choices
pub const HISTORY_LIMITS: &[u32] = &[10, 25, 50, 100];
pub const DEFAULT_HISTORY_LIMIT: u32 = 25;

/// Payout shown for every listed action before it is claimed
pub const NOMINAL_ACTION_PAYOUT: f64 = 0.010;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolved path of the view being shown
    pub path: String,
    /// Menu entry highlighted, derived from the resolved route
    pub active_nav: Option<&'static str>,
    pub view: View,
    pub toast: ToastState,
    /// Bumped on every navigation; renders from older generations are dropped
    pub nav_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            active_nav: Some(DEFAULT_PATH),
            view: View::Loading,
            toast: ToastState::default(),
            nav_generation: 0,
        }
    }
}

impl AppState {
    /// Claim session of the execute-action view, if shown
    pub fn claim_session(&self) -> Option<&ClaimSession> {
        match &self.view {
            View::ExecuteAction(session) => Some(session),
            _ => None,
        }
    }

    pub fn claim_session_mut(&mut self) -> Option<&mut ClaimSession> {
        match &mut self.view {
            View::ExecuteAction(session) => Some(session),
            _ => None,
        }
    }
}

/// Rendered page
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Dashboard(DashboardView),
    Earn,
    ActionList(ActionListView),
    ExecuteAction(ClaimSession),
    History(HistoryView),
    Withdrawals(WithdrawalsView),
    Settings(SettingsView),
    Placeholder { path: String },
    Error { message: String },
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Loading => "Carregando",
            View::Dashboard(_) => "Dashboard",
            View::Earn => "Ganhar",
            View::ActionList(_) => "Ações do Instagram",
            View::ExecuteAction(_) => "Executar ação",
            View::History(_) => "Histórico de ações",
            View::Withdrawals(_) => "Saques",
            View::Settings(_) => "Configurações",
            View::Placeholder { .. } => "Em construção",
            View::Error { .. } => "Erro",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub user_name: String,
    pub available: f64,
    pub blocked: f64,
    pub daily_earnings: Vec<DailyEarning>,
}

impl DashboardView {
    pub fn greeting(&self) -> String {
        format!("Olá {}, tudo bem?", self.user_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionListView {
    pub actions: Vec<ActionItem>,
    pub payout: f64,
    /// Inline fetch error; the list is empty when set
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub limit: u32,
    pub query: String,
    pub items: Vec<HistoryItem>,
    pub error: Option<String>,
}

impl Default for HistoryView {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            query: String::new(),
            items: Vec::new(),
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalsView {
    pub available: f64,
    pub payout: PayoutProfile,
    pub withdrawals: Vec<WithdrawalItem>,
}

/// Settings form; edits stay pending until saved
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub form: SessionConfig,
    pub dirty: bool,
}

/// Single toast slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Replace the message and show it. Returns the generation that a later
    /// hide must match.
    pub fn show(&mut self, message: String) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.visible = true;
        self.generation
    }

    /// Hide only if no newer message replaced the one from `generation`
    pub fn hide_if_current(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    /// Visible message, if any
    pub fn current(&self) -> Option<&str> {
        self.message.as_deref().filter(|_| self.visible)
    }
}
