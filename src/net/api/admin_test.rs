use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(docs_endpoint("o-1"), "/api/admin/orgs/o-1/docs");
    assert_eq!(verify_endpoint("o-1"), "/api/admin/orgs/o-1/verify");
}

#[test]
fn org_docs_rejects_empty_id_without_network() {
    let client = AdminClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.org_docs("")), Err(ApiError::Validation(_))));
}

#[test]
fn set_verification_rejects_empty_id_without_network() {
    let client = AdminClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.set_verification("  ", true)),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn verify_body_carries_the_decision() {
    assert_eq!(
        serde_json::to_value(VerifyBody { approved: false }).unwrap(),
        serde_json::json!({"approved": false})
    );
}
