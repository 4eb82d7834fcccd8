use futures::executor::block_on;

use super::*;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(event_donations_endpoint("ev-1"), "/api/donation/ev-1");
    assert_eq!(user_donations_endpoint("u-1"), "/api/donation/user/u-1");
}

#[test]
fn donation_body_omits_blank_message() {
    let body = DonationBody { event_id: "ev-1".to_owned(), amount: 1999, message: None };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"eventId": "ev-1", "amount": 1999})
    );
}

#[test]
fn donate_rejects_zero_amount_locally() {
    let client = DonationsClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.donate("ev-1", 0, None)),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn donate_rejects_empty_event_id() {
    let client = DonationsClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.donate("", 1000, Some("godspeed"))),
        Err(ApiError::Validation(_))
    ));
}
