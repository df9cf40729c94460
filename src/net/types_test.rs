use super::*;

#[test]
fn identity_decodes_server_user_record() {
    let raw = r#"{"id":7,"username":"konsta","email":"k@erez.ac","role":"admin"}"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.id, 7);
    assert_eq!(identity.username, "konsta");
    assert!(identity.is_admin());
}

#[test]
fn identity_missing_optional_fields_defaults_to_plain_user() {
    let identity: Identity = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.id, 0);
    assert_eq!(identity.display_name(), "a@b.c");
}

#[test]
fn unknown_role_is_not_admin() {
    let identity: Identity = serde_json::from_str(r#"{"email":"a@b.c","role":"editor"}"#).unwrap();
    assert_eq!(identity.role, Role::User);
    assert!(!identity.is_admin());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
}

#[test]
fn credentials_serialize_as_login_body() {
    let body = serde_json::to_value(Credentials::new("a@b.c", "hunter2")).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.c", "password": "hunter2" }));
}

#[test]
fn credentials_debug_hides_password() {
    let rendered = format!("{:?}", Credentials::new("a@b.c", "hunter2"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn error_body_tolerates_missing_error_field() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.error, None);
}
