//! # Claim Lifecycle Tests
//!
//! Drives the execute-action page end to end against [`FakeApi`] with tokio's
//! clock paused, so countdowns advance deterministically.

mod common;

use common::*;
use ganhar_terminal::app::messages::{
    MSG_CLAIM_EXPIRED, MSG_CLAIM_SKIPPED, MSG_CLAIM_SUBMITTED, MSG_NO_COMPATIBLE_ACTION,
    MSG_OPENING_LINK, MSG_OPEN_LINK_FIRST,
};
use ganhar_terminal::app::{AppEvent, ClaimPhase, View};
use ganhar_terminal::config::session::{KEY_CURRENT_CLAIM_ID, KEY_SKIP_NOTIFY_SERVER};
use ganhar_terminal::config::MemoryConfigStore;
use ganhar_terminal::core::service::ConfigStore;
use std::time::Duration;

fn claim_phase(h: &Harness) -> Option<ClaimPhase> {
    h.app.state.read().claim_session().map(|s| s.phase)
}

fn seconds_left(h: &Harness) -> u64 {
    h.app
        .state
        .read()
        .claim_session()
        .map(|s| s.seconds_left)
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_countdown_expires_after_five_seconds() {
    // Arrange
    let h = harness(FakeApi::default().with_claim(claim_expiring_in("1", 5, false)));

    // Act
    h.app.navigate("#/ganhar/instagram/acao/1").await;
    let mut seen = vec![seconds_left(&h)];
    tokio::time::sleep(Duration::from_millis(1100)).await;
    seen.push(seconds_left(&h));
    for _ in 0..4 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        seen.push(seconds_left(&h));
    }

    // Assert
    assert_eq!(seen, vec![5, 4, 3, 2, 1, 0]);
    {
        let state = h.app.state.read();
        let session = state.claim_session().unwrap();
        assert_eq!(session.phase, ClaimPhase::Expired);
        assert!(session.expiry_notice);
        assert!(!session.controls.access_profile);
        assert!(!session.controls.direct_access);
        assert!(!session.controls.confirm);
        assert!(session.controls.skip);
    }

    // Further time changes nothing
    tokio::time::sleep(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(
        h.app.state.read().claim_session().unwrap().expiry_transitions(),
        1
    );
    assert!(!h.app.countdown_armed());
    assert_eq!(h.app.live_countdowns(), 0);

    let mut expired_events = 0;
    while let Ok(event) = h.app.event_rx.try_recv() {
        if event == AppEvent::ClaimExpired {
            expired_events += 1;
        }
    }
    assert_eq!(expired_events, 1);
}

#[tokio::test(start_paused = true)]
async fn test_confirm_requires_opened_link() {
    // Arrange
    let h = harness(FakeApi::default().with_claim(claim_expiring_in("1", 60, false)));
    h.app.navigate("/ganhar/instagram/acao/1").await;

    // Act
    h.app.confirm_claim().await;

    // Assert
    assert_eq!(h.app.toast().as_deref(), Some(MSG_OPEN_LINK_FIRST));
    assert_eq!(h.api.calls_to("confirm_claim"), 0);
    assert_eq!(h.api.calls_to("get_claim"), 2);
    assert_eq!(h.app.current_path(), "/ganhar/instagram/acao/1");
    assert_eq!(claim_phase(&h), Some(ClaimPhase::Active));
}

#[tokio::test(start_paused = true)]
async fn test_open_profile_then_confirm() {
    // Arrange
    let api = FakeApi::default().with_claim(claim_expiring_in("7", 60, false));
    *api.lookup.lock() = vec![action("like"), action("follow")];
    let h = harness(api);
    h.app.navigate("/ganhar/instagram/acao/7").await;

    // Act
    h.app.open_profile().await;

    // Assert
    assert_eq!(
        h.opener.opened.lock().clone(),
        vec!["https://instagram.com/p/follow".to_string()]
    );
    assert_eq!(h.app.toast().as_deref(), Some(MSG_OPENING_LINK));
    {
        let lookups = h.api.lookups.lock();
        assert_eq!(lookups.len(), 1);
        assert_eq!(lookups[0].claim_id, serde_json::json!(7));
        assert_eq!(lookups[0].origem, "instagram");
        assert_eq!(lookups[0].botao, "acessar_perfil");
    }
    // Opening never changes the phase
    assert_eq!(claim_phase(&h), Some(ClaimPhase::Active));

    // Act
    h.app.confirm_claim().await;

    // Assert
    assert_eq!(h.api.calls_to("confirm_claim"), 1);
    assert_eq!(h.app.current_path(), "/dashboard");
    assert!(matches!(h.app.view(), View::Dashboard(_)));
    assert_eq!(h.app.toast().as_deref(), Some(MSG_CLAIM_SUBMITTED));
    assert!(!h.app.countdown_armed());
}

#[tokio::test(start_paused = true)]
async fn test_direct_intent_selects_like() {
    let api = FakeApi::default().with_claim(claim_expiring_in("7", 60, false));
    *api.lookup.lock() = vec![action("follow"), action("like")];
    let h = harness(api);
    h.app.navigate("/ganhar/instagram/acao/7").await;

    h.app.open_direct().await;

    assert_eq!(
        h.opener.opened.lock().clone(),
        vec!["https://instagram.com/p/like".to_string()]
    );
    assert_eq!(h.api.lookups.lock()[0].botao, "acesso_direto");
}

#[tokio::test(start_paused = true)]
async fn test_profile_intent_without_compatible_action() {
    // Arrange
    let api = FakeApi::default().with_claim(claim_expiring_in("3", 60, false));
    *api.lookup.lock() = vec![action("visualizar")];
    let h = harness(api);
    h.app.navigate("/ganhar/instagram/acao/3").await;

    // Act
    h.app.open_profile().await;

    // Assert
    assert_eq!(h.app.toast().as_deref(), Some(MSG_NO_COMPATIBLE_ACTION));
    assert!(h.opener.opened.lock().is_empty());
    assert_eq!(h.api.calls_to("mark_opened"), 0);
    assert_eq!(claim_phase(&h), Some(ClaimPhase::Active));
}

#[tokio::test(start_paused = true)]
async fn test_lookup_failure_is_toasted() {
    let h = harness(FakeApi::default().with_claim(claim_expiring_in("3", 60, false)));
    h.api.fail("lookup_actions");
    h.app.navigate("/ganhar/instagram/acao/3").await;

    h.app.open_direct().await;

    assert_eq!(h.app.toast().as_deref(), Some("lookup_actions falhou"));
    assert!(h.opener.opened.lock().is_empty());
    assert_eq!(h.app.current_path(), "/ganhar/instagram/acao/3");
}

#[tokio::test(start_paused = true)]
async fn test_gated_controls_rejected_after_expiry() {
    // Arrange
    let api = FakeApi::default().with_claim(claim_expiring_in("9", 1, true));
    *api.lookup.lock() = vec![action("follow")];
    let h = harness(api);
    h.app.navigate("/ganhar/instagram/acao/9").await;
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(claim_phase(&h), Some(ClaimPhase::Expired));

    // Act
    h.app.open_profile().await;
    h.app.confirm_claim().await;

    // Assert
    assert_eq!(h.app.toast().as_deref(), Some(MSG_CLAIM_EXPIRED));
    assert_eq!(h.api.calls_to("lookup_actions"), 0);
    assert_eq!(h.api.calls_to("confirm_claim"), 0);
    assert!(h.opener.opened.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_skip_returns_to_list_without_server_call() {
    let h = harness(FakeApi::default().with_claim(claim_expiring_in("4", 60, false)));
    h.app.navigate("/ganhar/instagram/acao/4").await;

    h.app.skip_claim().await;

    assert_eq!(h.app.current_path(), "/ganhar/instagram");
    assert_eq!(h.app.toast().as_deref(), Some(MSG_CLAIM_SKIPPED));
    assert_eq!(h.api.calls_to("skip_claim"), 0);
    assert!(!h.app.countdown_armed());
}

#[tokio::test(start_paused = true)]
async fn test_skip_notifies_server_when_enabled() {
    let store = MemoryConfigStore::with_values([(KEY_SKIP_NOTIFY_SERVER, "true")]);
    let h = harness_with_store(
        FakeApi::default().with_claim(claim_expiring_in("4", 60, false)),
        store,
    );
    h.api.fail("skip_claim");
    h.app.navigate("/ganhar/instagram/acao/4").await;

    h.app.skip_claim().await;

    // The failure is only logged
    assert_eq!(h.api.calls_to("skip_claim"), 1);
    assert_eq!(h.app.toast().as_deref(), Some(MSG_CLAIM_SKIPPED));
    assert_eq!(h.app.current_path(), "/ganhar/instagram");
}

#[tokio::test(start_paused = true)]
async fn test_skip_allowed_after_expiry() {
    let h = harness(FakeApi::default().with_claim(claim_expiring_in("4", 0, false)));
    h.app.navigate("/ganhar/instagram/acao/4").await;
    assert_eq!(claim_phase(&h), Some(ClaimPhase::Expired));
    assert!(!h.app.countdown_armed());

    h.app.skip_claim().await;

    assert_eq!(h.app.current_path(), "/ganhar/instagram");
}

#[tokio::test(start_paused = true)]
async fn test_missing_claim_renders_load_failure() {
    let h = harness(FakeApi::default());

    h.app.navigate("/ganhar/instagram/acao/404").await;

    let state = h.app.state.read();
    let session = state.claim_session().unwrap();
    assert_eq!(session.phase, ClaimPhase::LoadFailed);
    assert_eq!(session.error.as_deref(), Some("Claim não encontrado"));
    drop(state);
    assert!(!h.app.countdown_armed());
}

#[tokio::test(start_paused = true)]
async fn test_start_action_creates_claim_and_opens_it() {
    // Arrange
    let api = FakeApi::default();
    *api.listed.lock() = vec![action("seguir"), action("curtir")];
    let h = harness(api);
    h.app.navigate("/ganhar/instagram").await;

    // Act
    h.app.start_action(1).await;

    // Assert
    assert_eq!(h.api.calls_to("create_claim"), 1);
    assert_eq!(h.store.get(KEY_CURRENT_CLAIM_ID).as_deref(), Some("1"));
    assert_eq!(h.app.current_path(), "/ganhar/instagram/acao/1");
    assert_eq!(claim_phase(&h), Some(ClaimPhase::Active));
    assert!(h.app.countdown_armed());
}

#[tokio::test(start_paused = true)]
async fn test_start_action_out_of_range() {
    let api = FakeApi::default();
    *api.listed.lock() = vec![action("seguir")];
    let h = harness(api);
    h.app.navigate("/ganhar/instagram").await;

    h.app.start_action(5).await;

    assert_eq!(h.api.calls_to("create_claim"), 0);
    assert_eq!(h.app.current_path(), "/ganhar/instagram");
}
