use futures::executor::block_on;

use super::*;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn org_reviews_endpoint_formats_expected_path() {
    assert_eq!(org_reviews_endpoint("o-4"), "/api/reviews/org/o-4");
}

#[test]
fn submit_rejects_zero_rating() {
    let client = ReviewsClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.submit("o-4", 0.0, None)),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn submit_rejects_nan_rating() {
    let client = ReviewsClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.submit("o-4", f64::NAN, Some("great"))),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn review_body_omits_blank_comment() {
    let body = ReviewBody { org_id: "o-4".to_owned(), rating: 4.5, comment: None };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"orgId": "o-4", "rating": 4.5})
    );
}
