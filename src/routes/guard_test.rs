use super::*;
use crate::test_support::{admin, user};

const LOGIN: &str = "/login";

fn sessions() -> [SessionState; 3] {
    [
        SessionState::default(),
        SessionState { identity: Some(user("u@erez.ac")), checked: true },
        SessionState { identity: Some(admin("k@erez.ac")), checked: true },
    ]
}

fn metas() -> [RouteMeta; 4] {
    let base = RouteMeta::keyed("title.x");
    [base, base.authenticated(), base.admin(), base.authenticated().admin()]
}

#[test]
fn admin_routes_redirect_every_non_admin() {
    for meta in metas().into_iter().filter(|m| m.requires_admin) {
        for session in sessions().iter().filter(|s| !s.is_admin()) {
            assert_eq!(evaluate(&meta, session, LOGIN), Decision::Redirect(LOGIN.to_owned()));
        }
    }
}

#[test]
fn ungated_routes_always_proceed() {
    let meta = RouteMeta::fixed("About");
    for session in &sessions() {
        assert_eq!(evaluate(&meta, session, LOGIN), Decision::Proceed);
    }
}

#[test]
fn auth_routes_redirect_only_anonymous_visitors() {
    let meta = RouteMeta::keyed("title.recipes").authenticated();
    let [anonymous, signed_in, admin] = sessions();
    assert_eq!(evaluate(&meta, &anonymous, LOGIN), Decision::Redirect(LOGIN.to_owned()));
    assert_eq!(evaluate(&meta, &signed_in, LOGIN), Decision::Proceed);
    assert_eq!(evaluate(&meta, &admin, LOGIN), Decision::Proceed);
}

#[test]
fn admin_passes_every_gate() {
    let admin = &sessions()[2];
    for meta in &metas() {
        assert_eq!(evaluate(meta, admin, LOGIN), Decision::Proceed);
    }
}

#[test]
fn redirect_target_comes_from_caller() {
    let meta = RouteMeta::default().admin();
    assert_eq!(
        evaluate(&meta, &SessionState::default(), "/signin"),
        Decision::Redirect("/signin".to_owned())
    );
}
