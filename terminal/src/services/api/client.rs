//! # API Client
//!
//! The remote gateway: every call re-reads the session configuration, attaches
//! the token and compatibility headers, and collapses failures into
//! [`AppError`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Ack, ActionLookupRequest, ActionsResponse, ClaimDetails, ClaimId, CreateClaimResponse,
    DashboardResponse, ErrorResponse, HistoryResponse, PayoutProfile, WithdrawalsResponse,
};
use std::sync::Arc;
use std::time::Instant;

use crate::config::{ClientConfig, SessionConfig};
use crate::core::error::{AppError, Result, GENERIC_API_ERROR};
use crate::core::service::{ApiService, ConfigStore};

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "x-api-token";
/// Header that makes tunnelled deployments skip their interstitial page
pub const NGROK_HEADER: &str = "ngrok-skip-browser-warning";
/// Fallback message for actions-endpoint failures
pub const ACTIONS_API_ERROR: &str = "Erro na API de ações";
/// Shown when a success response cannot be decoded
pub const INVALID_RESPONSE: &str = "Resposta inválida do servidor";

/// HTTP client for the earnings service and the actions endpoint.
///
/// Holds no per-session state: the token, base URL override, actions URL and
/// compatibility flag are read from the injected store on every request.
pub struct ApiClient {
    pub(crate) client: Client,
    origin: String,
    store: Arc<dyn ConfigStore>,
}

impl ApiClient {
    /// Create a client; `config.http_timeout` bounds every request.
    pub fn new(config: &ClientConfig, store: Arc<dyn ConfigStore>) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            origin: config.api_origin.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Current session settings
    pub fn session(&self) -> SessionConfig {
        SessionConfig::load(self.store.as_ref())
    }

    /// Absolute URL of a service path
    pub(crate) fn service_url(&self, session: &SessionConfig, path: &str) -> String {
        let base = session.base_url().unwrap_or(self.origin.as_str());
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Absolute URL of the actions endpoint
    pub(crate) fn actions_url(&self, session: &SessionConfig) -> String {
        let url = session.actions_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.service_url(session, url)
        }
    }

    fn headers(session: &SessionConfig) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = session.token() {
            match HeaderValue::from_str(token) {
                Ok(value) => {
                    headers.insert(HeaderName::from_static(TOKEN_HEADER), value);
                }
                Err(_) => tracing::warn!("API token contains invalid header characters, not sent"),
            }
        }
        if session.use_ngrok {
            headers.insert(HeaderName::from_static(NGROK_HEADER), HeaderValue::from_static("true"));
        }
        headers
    }

    /// `GET` a service path
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// `GET` a service path with URL-encoded query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let session = self.session();
        let url = self.service_url(&session, path);
        let mut request = self.client.get(&url).headers(Self::headers(&session));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request, "GET", path, GENERIC_API_ERROR).await
    }

    /// `POST` a JSON body to a service path
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let session = self.session();
        let url = self.service_url(&session, path);
        let request = self
            .client
            .post(&url)
            .headers(Self::headers(&session))
            .json(body);
        self.execute(request, "POST", path, GENERIC_API_ERROR).await
    }

    /// `POST` a JSON body to the configured actions endpoint
    pub async fn post_actions<T, B>(&self, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let session = self.session();
        let url = self.actions_url(&session);
        let request = self
            .client
            .post(&url)
            .headers(Self::headers(&session))
            .json(body);
        self.execute(request, "POST", &url, ACTIONS_API_ERROR).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &'static str,
        endpoint: &str,
        fallback: &str,
    ) -> Result<T> {
        let start = Instant::now();

        let response = request.send().await.map_err(|e| {
            tracing::error!(method, endpoint, error = %e, "Network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(method, endpoint, error = %e, "Failed to read response body");
            AppError::Network(e.to_string())
        })?;
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            tracing::debug!(method, endpoint, status = status.as_u16(), duration_ms, "Request completed");
            serde_json::from_slice::<T>(&body).map_err(|e| {
                tracing::error!(method, endpoint, error = %e, "Response parse error");
                AppError::Network(INVALID_RESPONSE.to_string())
            })
        } else {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .map(|e| e.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            tracing::warn!(
                method,
                endpoint,
                status = status.as_u16(),
                error = %message,
                duration_ms,
                "Request failed"
            );
            Err(AppError::Api(message))
        }
    }
}

#[async_trait]
impl ApiService for ApiClient {
    async fn dashboard(&self) -> Result<DashboardResponse> {
        super::dashboard::get_dashboard(self).await
    }

    async fn list_actions(&self, origem: &str) -> Result<ActionsResponse> {
        super::actions::list_actions(self, origem).await
    }

    async fn create_claim(&self, origem: &str) -> Result<CreateClaimResponse> {
        super::claims::create_claim(self, origem).await
    }

    async fn get_claim(&self, claim_id: &ClaimId) -> Result<ClaimDetails> {
        super::claims::get_claim(self, claim_id).await
    }

    async fn mark_opened(&self, claim_id: &ClaimId) -> Result<Ack> {
        super::claims::mark_opened(self, claim_id).await
    }

    async fn confirm_claim(&self, claim_id: &ClaimId) -> Result<Ack> {
        super::claims::confirm_claim(self, claim_id).await
    }

    async fn skip_claim(&self, claim_id: &ClaimId) -> Result<Ack> {
        super::claims::skip_claim(self, claim_id).await
    }

    async fn history(&self, limit: u32, query: &str) -> Result<HistoryResponse> {
        super::history::get_history(self, limit, query).await
    }

    async fn payout_profile(&self) -> Result<PayoutProfile> {
        super::withdrawals::get_payout_profile(self).await
    }

    async fn withdrawals(&self) -> Result<WithdrawalsResponse> {
        super::withdrawals::list_withdrawals(self).await
    }

    async fn request_withdrawal(&self, amount: f64) -> Result<Ack> {
        super::withdrawals::request_withdrawal(self, amount).await
    }

    async fn lookup_actions(&self, request: &ActionLookupRequest) -> Result<ActionsResponse> {
        super::actions::lookup_actions(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::session::{KEY_ACTIONS_API_URL, KEY_API_BASE_URL, KEY_API_TOKEN, KEY_USE_NGROK};
    use crate::config::MemoryConfigStore;

    fn client_with(store: Arc<MemoryConfigStore>) -> ApiClient {
        ApiClient::new(&ClientConfig::with_origin("http://origin.test/"), store)
    }

    #[test]
    fn test_service_url_uses_origin_without_override() {
        let client = client_with(Arc::new(MemoryConfigStore::default()));
        let session = client.session();
        assert_eq!(client.service_url(&session, "/api/dashboard"), "http://origin.test/api/dashboard");
        assert_eq!(client.actions_url(&session), "http://origin.test/api/acoes");
    }

    #[test]
    fn test_base_override_and_absolute_actions_url() {
        let store = Arc::new(MemoryConfigStore::with_values([
            (KEY_API_BASE_URL, "https://api.example.test/"),
            (KEY_ACTIONS_API_URL, "https://actions.example.test/acoes"),
        ]));
        let client = client_with(store);
        let session = client.session();
        assert_eq!(
            client.service_url(&session, "/api/claims/1"),
            "https://api.example.test/api/claims/1"
        );
        assert_eq!(client.actions_url(&session), "https://actions.example.test/acoes");
    }

    #[test]
    fn test_headers_follow_session() {
        let store = Arc::new(MemoryConfigStore::default());
        let client = client_with(store.clone());

        let headers = ApiClient::headers(&client.session());
        assert!(headers.get(TOKEN_HEADER).is_none());
        assert!(headers.get(NGROK_HEADER).is_none());

        store.set(KEY_API_TOKEN, "tok").unwrap();
        store.set(KEY_USE_NGROK, "true").unwrap();
        let headers = ApiClient::headers(&client.session());
        assert_eq!(headers.get(TOKEN_HEADER).unwrap(), "tok");
        assert_eq!(headers.get(NGROK_HEADER).unwrap(), "true");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}
