//! # Hash Router
//!
//! Maps location paths (the part after `#`) to [`Route`]s using an ordered
//! rule table. Rules are checked top to bottom and the first match wins;
//! anything unmatched redirects to [`DEFAULT_PATH`].
//!
//! | Path                              | Route                         | Menu entry        |
//! |-----------------------------------|-------------------------------|-------------------|
//! | `/dashboard`                      | [`Route::Dashboard`]          | `/dashboard`      |
//! | `/ganhar`                         | [`Route::Earn`]               | `/ganhar`         |
//! | `/ganhar/instagram`               | [`Route::InstagramActions`]   | `/ganhar`         |
//! | `/ganhar/instagram/acao/{id}`     | [`Route::ExecuteAction`]      | `/ganhar`         |
//! | `/historico-acoes`                | [`Route::History`]            | `/historico-acoes`|
//! | `/saques`                         | [`Route::Withdrawals`]        | `/saques`         |
//! | `/configuracoes`                  | [`Route::Settings`]           | `/configuracoes`  |
//! | `/minha-conta`, `/indicados`      | [`Route::Placeholder`]        | itself            |
//! | `/logout`                         | [`Route::Logout`]             | none              |

use shared::dto::ClaimId;

pub const DEFAULT_PATH: &str = "/dashboard";
pub const EARN_PATH: &str = "/ganhar";
pub const ACTIONS_PATH: &str = "/ganhar/instagram";
pub const EXECUTE_PREFIX: &str = "/ganhar/instagram/acao/";
pub const HISTORY_PATH: &str = "/historico-acoes";
pub const WITHDRAWALS_PATH: &str = "/saques";
pub const SETTINGS_PATH: &str = "/configuracoes";
pub const ACCOUNT_PATH: &str = "/minha-conta";
pub const REFERRALS_PATH: &str = "/indicados";
pub const LOGOUT_PATH: &str = "/logout";

/// Menu entries in display order
pub const NAV_ENTRIES: &[(&str, &str)] = &[
    (DEFAULT_PATH, "Dashboard"),
    (EARN_PATH, "Ganhar"),
    (HISTORY_PATH, "Histórico de ações"),
    (WITHDRAWALS_PATH, "Saques"),
    (ACCOUNT_PATH, "Minha conta"),
    (REFERRALS_PATH, "Indicados"),
    (SETTINGS_PATH, "Configurações"),
    (LOGOUT_PATH, "Sair"),
];

/// A resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Earn,
    InstagramActions,
    ExecuteAction(ClaimId),
    History,
    Withdrawals,
    Settings,
    Placeholder(&'static str),
    Logout,
}

impl Route {
    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => DEFAULT_PATH.to_string(),
            Route::Earn => EARN_PATH.to_string(),
            Route::InstagramActions => ACTIONS_PATH.to_string(),
            Route::ExecuteAction(id) => execute_path(id),
            Route::History => HISTORY_PATH.to_string(),
            Route::Withdrawals => WITHDRAWALS_PATH.to_string(),
            Route::Settings => SETTINGS_PATH.to_string(),
            Route::Placeholder(path) => path.to_string(),
            Route::Logout => LOGOUT_PATH.to_string(),
        }
    }

    /// Menu entry highlighted while this route is shown
    pub fn nav_target(&self) -> Option<&'static str> {
        match self {
            Route::Dashboard => Some(DEFAULT_PATH),
            Route::Earn | Route::InstagramActions | Route::ExecuteAction(_) => Some(EARN_PATH),
            Route::History => Some(HISTORY_PATH),
            Route::Withdrawals => Some(WITHDRAWALS_PATH),
            Route::Settings => Some(SETTINGS_PATH),
            Route::Placeholder(path) => Some(*path),
            Route::Logout => None,
        }
    }
}

/// Path of the execute-action view for a claim
pub fn execute_path(claim_id: &ClaimId) -> String {
    format!("{}{}", EXECUTE_PREFIX, claim_id)
}

/// Outcome of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Exact(&'static str),
    /// Matches when the path starts with the prefix; the builder gets the rest
    Prefix(&'static str),
}

struct RouteRule {
    matcher: Matcher,
    build: fn(&str) -> Option<Route>,
}

impl RouteRule {
    fn exact(path: &'static str, build: fn(&str) -> Option<Route>) -> Self {
        Self {
            matcher: Matcher::Exact(path),
            build,
        }
    }

    fn prefix(prefix: &'static str, build: fn(&str) -> Option<Route>) -> Self {
        Self {
            matcher: Matcher::Prefix(prefix),
            build,
        }
    }

    fn try_match(&self, path: &str) -> Option<Route> {
        match self.matcher {
            Matcher::Exact(expected) if path == expected => (self.build)(""),
            Matcher::Prefix(prefix) => path.strip_prefix(prefix).and_then(self.build),
            _ => None,
        }
    }
}

/// Claim ids are interpolated into service paths, so only plain tokens match.
fn claim_route(rest: &str) -> Option<Route> {
    let plain = rest
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if rest.is_empty() || !plain {
        return None;
    }
    Some(Route::ExecuteAction(ClaimId::new(rest)))
}

/// Ordered route table
pub struct Router {
    rules: Vec<RouteRule>,
    fallback: &'static str,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        let rules = vec![
            RouteRule::exact(DEFAULT_PATH, |_| Some(Route::Dashboard)),
            RouteRule::exact(EARN_PATH, |_| Some(Route::Earn)),
            RouteRule::exact(ACTIONS_PATH, |_| Some(Route::InstagramActions)),
            RouteRule::prefix(EXECUTE_PREFIX, claim_route),
            RouteRule::exact(HISTORY_PATH, |_| Some(Route::History)),
            RouteRule::exact(WITHDRAWALS_PATH, |_| Some(Route::Withdrawals)),
            RouteRule::exact(SETTINGS_PATH, |_| Some(Route::Settings)),
            RouteRule::exact(ACCOUNT_PATH, |_| Some(Route::Placeholder(ACCOUNT_PATH))),
            RouteRule::exact(REFERRALS_PATH, |_| Some(Route::Placeholder(REFERRALS_PATH))),
            RouteRule::exact(LOGOUT_PATH, |_| Some(Route::Logout)),
        ];

        Self {
            rules,
            fallback: DEFAULT_PATH,
        }
    }

    /// Resolve a raw location. A leading `#` is ignored and an empty path
    /// resolves as the default route.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let path = normalize(raw);

        for rule in &self.rules {
            if let Some(route) = rule.try_match(path) {
                return Resolution::Render(route);
            }
        }

        tracing::debug!(path = %path, fallback = %self.fallback, "No route matched");
        Resolution::Redirect(self.fallback)
    }
}

fn normalize(raw: &str) -> &str {
    let path = raw.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    if path.is_empty() {
        DEFAULT_PATH
    } else {
        path
    }
}
