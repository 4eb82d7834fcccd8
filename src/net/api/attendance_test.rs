use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(attend_endpoint("ev-1"), "/api/attendance/attend/ev-1");
    assert_eq!(unattend_endpoint("ev-1"), "/api/attendance/unattend/ev-1");
    assert_eq!(is_me_attending_endpoint("ev-1"), "/api/attendance/isMeAttending/ev-1");
    assert_eq!(attendees_endpoint("ev-1"), "/api/attendance/ev-1");
}

#[test]
fn attending_flag_parses() {
    let flag: AttendingFlag = serde_json::from_str(r#"{"attending":false}"#).unwrap();
    assert!(!flag.attending);
}

#[test]
fn toggles_reject_empty_event_id() {
    let client = AttendanceClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.attend("")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.unattend(" ")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.is_me_attending("")), Err(ApiError::Validation(_))));
    assert!(matches!(block_on(client.attendees("")), Err(ApiError::Validation(_))));
}
