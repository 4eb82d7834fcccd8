use super::*;

// =============================================================
// Credential validation
// =============================================================

#[test]
fn validate_credentials_trims_email() {
    let creds = validate_credentials("  asha@example.com  ", "secret").unwrap();
    assert_eq!(creds.email, "asha@example.com");
    assert_eq!(creds.password, "secret");
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(validate_credentials("   ", "secret"), Err("Enter your email."));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter your password."));
}

#[test]
fn passwords_are_not_trimmed() {
    let creds = validate_credentials("a@b.com", " spaced ").unwrap();
    assert_eq!(creds.password, " spaced ");
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn login_response_parses_token_and_actor() {
    let json = r#"{"token":"opaque","user":{"type":"org","id":"o1","name":"Seva","email":"s@s.org"}}"#;
    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.token, "opaque");
    assert!(matches!(response.user, Actor::Org(_)));
}

#[test]
fn verify_response_allows_null_user() {
    let response: VerifyResponse = serde_json::from_str(r#"{"user":null}"#).unwrap();
    assert!(response.user.is_none());
}

#[test]
fn credentials_serialize_expected_fields() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({"email": "a@b.com", "password": "pw"}));
}

// =============================================================
// Logout / session interaction
// =============================================================

#[test]
fn logout_clears_the_session_without_io() {
    let session = crate::session::Session::in_memory();
    session.set_token("tok");
    let client = AuthClient::new(crate::net::http::Http::new(session.clone()));
    client.logout();
    assert_eq!(session.token(), None);
}

#[test]
fn verify_with_no_token_resolves_none_without_a_request() {
    let session = crate::session::Session::in_memory();
    let client = AuthClient::new(crate::net::http::Http::new(session));
    // The early return fires before the transport layer is ever consulted,
    // so this resolves even where no fetch implementation exists.
    assert_eq!(futures::executor::block_on(client.verify()), None);
}

#[test]
fn verify_after_logout_resolves_none() {
    let session = crate::session::Session::in_memory();
    session.set_token("tok");
    let client = AuthClient::new(crate::net::http::Http::new(session));
    client.logout();
    assert_eq!(futures::executor::block_on(client.verify()), None);
}
