use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u-7"), "/api/users/u-7");
}

#[test]
fn profile_draft_maps_only_set_fields() {
    let draft = UserProfileDraft { city: Some("Indore".to_owned()), ..UserProfileDraft::default() };
    assert_eq!(draft.into_form().fields(), [("city".to_owned(), "Indore".to_owned())]);
}

#[test]
fn get_rejects_blank_user_id() {
    let client = UsersClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.get("  ")), Err(ApiError::Validation(_))));
}

#[test]
fn my_activity_requires_a_session() {
    let client = UsersClient::new(Http::new(Session::in_memory()));
    assert_eq!(block_on(client.my_activity()), Err(ApiError::Unauthorized));
}
