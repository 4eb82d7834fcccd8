use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(volunteer_endpoint("ev-1"), "/api/volunteer/volunteer/ev-1");
    assert_eq!(unvolunteer_endpoint("ev-1"), "/api/volunteer/unvolunteer/ev-1");
    assert_eq!(approve_endpoint("ev-1", "u-2"), "/api/volunteer/approve/ev-1/u-2");
    assert_eq!(reject_endpoint("ev-1", "u-2"), "/api/volunteer/reject/ev-1/u-2");
    assert_eq!(is_me_volunteering_endpoint("ev-1"), "/api/volunteer/isMeVolunteering/ev-1");
    assert_eq!(volunteers_endpoint("ev-1"), "/api/volunteer/ev-1");
}

#[test]
fn volunteering_flag_parses() {
    let flag: VolunteeringFlag = serde_json::from_str(r#"{"volunteering":true}"#).unwrap();
    assert!(flag.volunteering);
}

#[test]
fn approve_requires_both_identifiers() {
    let client = VolunteeringClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.approve("", "u-2")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.approve("ev-1", "")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.reject("ev-1", "  ")), Err(ApiError::Validation(_))));
}

#[test]
fn signup_rejects_empty_event_id() {
    let client = VolunteeringClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.volunteer("")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.unvolunteer("")), Err(ApiError::Validation(_))));
}
