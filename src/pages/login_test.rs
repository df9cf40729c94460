use super::*;

#[test]
fn validate_login_input_trims_email() {
    let credentials = validate_login_input("  k@erez.ac ", "pw").unwrap();
    assert_eq!(credentials, Credentials::new("k@erez.ac", "pw"));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let credentials = validate_login_input("k@erez.ac", " pw ").unwrap();
    assert_eq!(credentials.password, " pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("login.missing_fields"));
    assert_eq!(validate_login_input("k@erez.ac", ""), Err("login.missing_fields"));
}
