use super::*;

#[test]
fn auth_errors_show_the_server_message() {
    let err = ApiError::Auth("account suspended".to_owned());
    assert_eq!(login_error_message(&err), "account suspended");
}

#[test]
fn empty_auth_message_falls_back_to_generic_text() {
    let err = ApiError::Auth(String::new());
    assert_eq!(login_error_message(&err), "Invalid email or password.");
}

#[test]
fn network_errors_suggest_checking_the_connection() {
    let err = ApiError::Network("fetch failed".to_owned());
    assert!(login_error_message(&err).contains("connection"));
}

#[test]
fn other_errors_pass_through_with_context() {
    let err = ApiError::Server { status: 503, message: "maintenance".to_owned() };
    assert_eq!(login_error_message(&err), "Login failed: server error (503): maintenance");
}
