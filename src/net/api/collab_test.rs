use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(accept_endpoint("r-1"), "/api/collab/accept/r-1");
    assert_eq!(reject_endpoint("r-1"), "/api/collab/reject/r-1");
}

#[test]
fn send_request_rejects_empty_org_id_without_network() {
    let client = CollabClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.send_request("", None, None)),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn accept_and_reject_require_request_id() {
    let client = CollabClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.accept("")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.reject("  ")), Err(ApiError::Validation(_))));
}

#[test]
fn request_body_omits_blank_optionals() {
    let body = RequestBody { org_id: "o-1".to_owned(), event_id: None, message: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"orgId": "o-1"}));
}
