//! # Gateway Tests
//!
//! [`ApiClient`] against a local axum server standing in for the earnings
//! service and the actions endpoint.

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

use ganhar_terminal::config::session::{
    KEY_ACTIONS_API_URL, KEY_API_BASE_URL, KEY_API_TOKEN, KEY_USE_NGROK,
};
use ganhar_terminal::config::{ClientConfig, MemoryConfigStore};
use ganhar_terminal::core::service::{ApiService, ConfigStore};
use ganhar_terminal::app::{claim::select_action, ButtonIntent};
use ganhar_terminal::services::api::client::INVALID_RESPONSE;
use ganhar_terminal::services::ApiClient;
use ganhar_terminal::AppError;
use shared::dto::{ActionLookupRequest, ClaimId};

#[derive(Clone, Default)]
struct Seen {
    headers: Arc<Mutex<Vec<HeaderMap>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<String>>>,
    custom_hits: Arc<Mutex<usize>>,
}

async fn dashboard(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    seen.headers.lock().push(headers);
    Json(json!({
        "wallet": { "saldo_disponivel": 12.5, "saldo_bloqueado": 3 },
        "user": { "id": 1, "name": "Ana" },
        "daily_earnings": []
    }))
}

async fn claim(Path(id): Path<String>) -> impl IntoResponse {
    if id == "404" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "ok": false, "error": "Claim não encontrado" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": id.parse::<i64>().unwrap_or(0),
            "action_tipo": "seguir",
            "action_target_url": "https://instagram.com/p/1",
            "payout_amount": 0.01,
            "expires_at": "2025-01-01T12:00:05",
            "opened_link": 1
        })),
    )
}

async fn confirm(Path(_id): Path<String>) -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn acoes(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.bodies.lock().push(body);
    Json(json!({ "acoes": [ { "tipo": "seguir", "target_url": "https://instagram.com/p/1" } ] }))
}

async fn custom_acoes(State(seen): State<Seen>, Json(body): Json<Value>) -> impl IntoResponse {
    *seen.custom_hits.lock() += 1;
    seen.bodies.lock().push(body);
    (StatusCode::BAD_GATEWAY, "")
}

async fn sparse_acoes(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "acoes": [
        null,
        { "tipo": null, "target_url": "https://instagram.com/p/0" },
        { "tipo": "seguir", "target_url": "https://instagram.com/p/2" }
    ] }))
}

async fn withdraws() -> impl IntoResponse {
    (StatusCode::OK, "<html>manutenção</html>")
}

async fn history(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
    seen.queries.lock().push(query.unwrap_or_default());
    Json(json!({ "items": [ { "id": 1, "claimed_at": "2025-01-01", "payout_amount": 0.01 } ] }))
}

async fn serve(seen: Seen) -> String {
    let router = Router::new()
        .route("/api/dashboard", get(dashboard))
        .route("/api/claims/:id", get(claim))
        .route("/api/claims/:id/confirm", post(confirm))
        .route("/api/acoes", post(acoes))
        .route("/custom/acoes", post(custom_acoes))
        .route("/sparse/acoes", post(sparse_acoes))
        .route("/api/withdraws", get(withdraws))
        .route("/api/historico-acoes", get(history))
        .with_state(seen);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> (ApiClient, Arc<MemoryConfigStore>, Seen, String) {
    let seen = Seen::default();
    let origin = serve(seen.clone()).await;
    let store = Arc::new(MemoryConfigStore::default());
    let client = ApiClient::new(&ClientConfig::with_origin(origin.clone()), store.clone());
    (client, store, seen, origin)
}

#[tokio::test]
async fn test_headers_follow_live_session() {
    // Arrange
    let (client, store, seen, _) = client().await;
    store.set(KEY_API_TOKEN, "abc").unwrap();
    store.set(KEY_USE_NGROK, "true").unwrap();

    // Act
    let dashboard = client.dashboard().await.unwrap();

    // Assert
    assert_eq!(dashboard.user.name, "Ana");
    assert_eq!(dashboard.wallet.saldo_bloqueado, 3.0);
    {
        let headers = seen.headers.lock();
        assert_eq!(headers[0]["x-api-token"], "abc");
        assert_eq!(headers[0]["ngrok-skip-browser-warning"], "true");
        assert_eq!(headers[0]["content-type"], "application/json");
    }

    // Changes apply to the next call without rebuilding the client
    store.set(KEY_API_TOKEN, "").unwrap();
    store.set(KEY_USE_NGROK, "false").unwrap();
    client.dashboard().await.unwrap();

    let headers = seen.headers.lock();
    assert!(headers[1].get("x-api-token").is_none());
    assert!(headers[1].get("ngrok-skip-browser-warning").is_none());
}

#[tokio::test]
async fn test_error_message_extracted_from_body() {
    let (client, _, _, _) = client().await;

    let err = client.get_claim(&ClaimId::new("404")).await.unwrap_err();

    assert_eq!(err, AppError::Api("Claim não encontrado".to_string()));
    assert_eq!(err.user_message(), "Claim não encontrado");
}

#[tokio::test]
async fn test_generic_message_without_error_body() {
    let (client, _, _, _) = client().await;

    let err = client.confirm_claim(&ClaimId::new("1")).await.unwrap_err();

    assert_eq!(err, AppError::Api("Erro".to_string()));
}

#[tokio::test]
async fn test_claim_decoding() {
    let (client, _, _, _) = client().await;

    let claim = client.get_claim(&ClaimId::new("5")).await.unwrap();

    assert!(claim.opened_link);
    assert_eq!(claim.id, Some(ClaimId::new("5")));
    let deadline = claim.expires_at_utc().unwrap();
    assert_eq!(deadline.to_rfc3339(), "2025-01-01T12:00:05+00:00");
}

#[tokio::test]
async fn test_actions_endpoint_resolution() {
    // Arrange
    let (client, store, seen, origin) = client().await;
    let request = ActionLookupRequest {
        claim_id: ClaimId::new("5").to_json(),
        origem: "instagram".to_string(),
        botao: "acessar_perfil".to_string(),
    };

    // Act: default relative URL
    let actions = client.lookup_actions(&request).await.unwrap();

    // Assert
    assert_eq!(actions.acoes.len(), 1);
    assert_eq!(
        seen.bodies.lock()[0],
        json!({ "claim_id": 5, "origem": "instagram", "botao": "acessar_perfil" })
    );

    // Act: absolute URL used as-is
    store
        .set(KEY_ACTIONS_API_URL, &format!("{}/custom/acoes", origin))
        .unwrap();
    let err = client.lookup_actions(&request).await.unwrap_err();

    // Assert
    assert_eq!(*seen.custom_hits.lock(), 1);
    assert_eq!(err, AppError::Api("Erro na API de ações".to_string()));
}

#[tokio::test]
async fn test_null_action_entries_are_skipped() {
    // Arrange
    let (client, store, _, origin) = client().await;
    store
        .set(KEY_ACTIONS_API_URL, &format!("{}/sparse/acoes", origin))
        .unwrap();
    let request = ActionLookupRequest {
        claim_id: ClaimId::new("5").to_json(),
        origem: "instagram".to_string(),
        botao: "acessar_perfil".to_string(),
    };

    // Act
    let actions = client.lookup_actions(&request).await.unwrap();

    // Assert
    assert_eq!(actions.acoes.len(), 2);
    let chosen = select_action(&actions.acoes, ButtonIntent::Profile).unwrap();
    assert_eq!(chosen.target_url, "https://instagram.com/p/2");
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let (client, _, _, _) = client().await;

    let err = client.withdrawals().await.unwrap_err();

    assert_eq!(err, AppError::Network(INVALID_RESPONSE.to_string()));
    assert_eq!(err.user_message(), INVALID_RESPONSE);
}

#[tokio::test]
async fn test_list_actions_body() {
    let (client, _, seen, _) = client().await;

    client.list_actions("instagram").await.unwrap();

    assert_eq!(
        seen.bodies.lock()[0],
        json!({ "origem": "instagram", "acao": "listar" })
    );
}

#[tokio::test]
async fn test_history_query_parameters() {
    let (client, _, seen, _) = client().await;

    let history = client.history(10, "maria silva").await.unwrap();

    assert_eq!(history.items.len(), 1);
    assert_eq!(history.items[0].date(), "2025-01-01");
    assert_eq!(seen.queries.lock()[0], "limit=10&q=maria+silva");
}

#[tokio::test]
async fn test_base_url_override() {
    // Arrange: default origin points nowhere, the override points at the server
    let seen = Seen::default();
    let server = serve(seen.clone()).await;
    let store = Arc::new(MemoryConfigStore::default());
    let client = ApiClient::new(
        &ClientConfig::with_origin(unused_origin().await),
        store.clone(),
    );

    // Act & Assert
    assert!(matches!(client.dashboard().await, Err(AppError::Network(_))));

    store.set(KEY_API_BASE_URL, &format!("{}/", server)).unwrap();
    assert_eq!(client.dashboard().await.unwrap().user.name, "Ana");
}

/// Origin of a port nobody listens on
async fn unused_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
