use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(error_from_status(401, "nope"), ApiError::Unauthorized);
}

#[test]
fn status_403_maps_to_unauthorized() {
    assert_eq!(error_from_status(403, ""), ApiError::Unauthorized);
}

#[test]
fn status_404_maps_to_not_found() {
    assert_eq!(error_from_status(404, "missing"), ApiError::NotFound);
}

#[test]
fn status_500_keeps_status_and_message() {
    assert_eq!(
        error_from_status(500, "boom"),
        ApiError::Server { status: 500, message: "boom".to_owned() }
    );
}

#[test]
fn status_422_is_a_server_error_not_local_validation() {
    assert!(matches!(error_from_status(422, "bad"), ApiError::Server { status: 422, .. }));
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_prefers_message_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"m","error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), "m");
}

#[test]
fn error_body_falls_back_to_error_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), "e");
}

#[test]
fn error_body_empty_message_falls_through() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"","error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), "e");
}

#[test]
fn error_body_with_nothing_is_empty() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.into_message(), "");
}

// =============================================================
// require_id
// =============================================================

#[test]
fn require_id_accepts_and_trims_values() {
    assert_eq!(require_id("eventId", " ev-1 "), Ok("ev-1".to_owned()));
}

#[test]
fn require_id_rejects_empty() {
    assert_eq!(
        require_id("eventId", ""),
        Err(ApiError::Validation("eventId is required".to_owned()))
    );
}

#[test]
fn require_id_rejects_whitespace_only() {
    assert!(matches!(require_id("orgId", "   "), Err(ApiError::Validation(_))));
}

#[test]
fn errors_render_human_readable_messages() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session is not authorized");
    assert_eq!(
        ApiError::Server { status: 502, message: "bad gateway".to_owned() }.to_string(),
        "server error (502): bad gateway"
    );
}
