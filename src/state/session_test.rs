use super::*;
use crate::net::types::Role;
use crate::test_support::{MockSessionApi, admin, unauthorized, user};

fn credentials() -> Credentials {
    Credentials::new("k@erez.ac", "correct horse")
}

// =============================================================
// SessionState derived flags
// =============================================================

#[test]
fn default_state_is_anonymous_and_unchecked() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.checked);
}

#[test]
fn derived_flags_follow_identity_role() {
    let mut state = SessionState { identity: Some(user("u@erez.ac")), checked: true };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());

    if let Some(identity) = state.identity.as_mut() {
        identity.role = Role::Admin;
    }
    assert!(state.is_admin());

    state.identity = None;
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

// =============================================================
// AuthenticationError mapping
// =============================================================

#[test]
fn rejection_uses_server_message() {
    let err = AuthenticationError::from(SessionError::Rejected {
        status: 401,
        message: Some("Invalid email or password".to_owned()),
    });
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn rejection_without_message_uses_default() {
    let err = AuthenticationError::from(SessionError::Rejected { status: 500, message: None });
    assert_eq!(err.to_string(), DEFAULT_LOGIN_ERROR);

    let blank = AuthenticationError::from(SessionError::Rejected { status: 400, message: Some("  ".to_owned()) });
    assert_eq!(blank.message, DEFAULT_LOGIN_ERROR);
}

#[test]
fn transport_failure_keeps_its_description() {
    let err = AuthenticationError::from(SessionError::Transport("offline".to_owned()));
    assert_eq!(err.message, "session request failed: offline");
}

// =============================================================
// login / logout / verify
// =============================================================

#[tokio::test]
async fn login_success_replaces_identity() {
    let api = MockSessionApi::new();
    api.queue_login(Ok(admin("k@erez.ac")));
    let store = SessionStore::new(api);

    let identity = store.login(credentials()).await.unwrap();
    assert_eq!(identity.email, "k@erez.ac");
    assert!(store.is_authenticated());
    assert!(store.is_admin());
    assert_eq!(store.identity(), Some(identity));
}

#[tokio::test]
async fn failed_login_leaves_previous_identity_untouched() {
    let api = MockSessionApi::new();
    api.queue_login(Ok(user("first@erez.ac")));
    api.queue_login(Err(SessionError::Rejected {
        status: 401,
        message: Some("Invalid email or password".to_owned()),
    }));
    let store = SessionStore::new(api);
    store.login(credentials()).await.unwrap();
    let before = store.snapshot();

    let err = store.login(credentials()).await.unwrap_err();
    assert_eq!(err.message, "Invalid email or password");
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn failed_login_while_anonymous_stays_anonymous() {
    let store = SessionStore::new(MockSessionApi::new());
    assert!(store.login(credentials()).await.is_err());
    assert_eq!(store.snapshot(), SessionState::default());
}

#[tokio::test]
async fn logout_clears_identity_even_when_request_fails() {
    let api = MockSessionApi::new();
    api.queue_login(Ok(admin("k@erez.ac")));
    api.queue_logout(Err(SessionError::Transport("offline".to_owned())));
    let store = SessionStore::new(api);
    store.login(credentials()).await.unwrap();

    store.logout().await;
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
    assert_eq!(store.api().calls(), vec!["login", "logout"]);
}

#[tokio::test]
async fn verify_success_sets_identity_and_marks_checked() {
    let api = MockSessionApi::new();
    api.queue_identity(Ok(user("u@erez.ac")));
    let store = SessionStore::new(api);

    store.verify().await;
    assert!(store.is_checked());
    assert_eq!(store.identity().map(|i| i.email), Some("u@erez.ac".to_owned()));
}

#[tokio::test]
async fn verify_failure_downgrades_to_anonymous() {
    let api = MockSessionApi::new();
    api.queue_login(Ok(user("u@erez.ac")));
    api.queue_identity(Err(unauthorized()));
    let store = SessionStore::new(api);
    store.login(credentials()).await.unwrap();

    store.verify().await;
    assert!(store.is_checked());
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn verify_transport_error_is_absorbed() {
    let store = SessionStore::new(MockSessionApi::new());
    store.verify().await;
    assert!(store.is_checked());
    assert!(store.identity().is_none());
}

// =============================================================
// Overlapping calls settle by completion order
// =============================================================

#[tokio::test]
async fn verify_settling_after_login_wins() {
    let api = MockSessionApi::new();
    let me = api.gate_identity();
    let login = api.gate_login();
    let store = SessionStore::new(api);

    let driver = async {
        login.send(Ok(admin("k@erez.ac"))).unwrap();
        while !store.is_authenticated() {
            tokio::task::yield_now().await;
        }
        me.send(Err(unauthorized())).unwrap();
    };
    let ((), login_result, ()) = tokio::join!(store.verify(), store.login(credentials()), driver);

    assert!(login_result.is_ok());
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn login_settling_after_verify_wins() {
    let api = MockSessionApi::new();
    let me = api.gate_identity();
    let login = api.gate_login();
    let store = SessionStore::new(api);

    let driver = async {
        me.send(Ok(user("old@erez.ac"))).unwrap();
        while !store.is_checked() {
            tokio::task::yield_now().await;
        }
        login.send(Ok(admin("k@erez.ac"))).unwrap();
    };
    let ((), login_result, ()) = tokio::join!(store.verify(), store.login(credentials()), driver);

    assert!(login_result.is_ok());
    assert_eq!(store.identity().map(|i| i.email), Some("k@erez.ac".to_owned()));
    assert!(store.is_admin());
}
