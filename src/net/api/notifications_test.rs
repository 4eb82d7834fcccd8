use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::session::Session;

fn unread(id: &str) -> Notification {
    Notification {
        id: id.to_owned(),
        message: "volunteer approved".to_owned(),
        kind: None,
        read: false,
        created_at: "2026-08-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn mark_read_endpoint_formats_expected_path() {
    assert_eq!(mark_read_endpoint("n-1"), "/api/notifications/n-1/read");
}

#[test]
fn tally_counts_only_unread_items() {
    let mut items = vec![unread("n-1"), unread("n-2")];
    items[1].read = true;
    let tally = tally_unread(&items, UNREAD_SCAN_LIMIT);
    assert_eq!(tally, UnreadCount { count: 1, saturated: false });
    assert_eq!(tally.badge(), "1");
}

#[test]
fn tally_saturates_at_the_scan_window() {
    let items: Vec<Notification> = (0..UNREAD_SCAN_LIMIT).map(|i| unread(&format!("n-{i}"))).collect();
    let tally = tally_unread(&items, UNREAD_SCAN_LIMIT);
    assert!(tally.saturated);
    assert_eq!(tally.badge(), "200+");
}

#[test]
fn empty_feed_tallies_zero() {
    let tally = tally_unread(&[], UNREAD_SCAN_LIMIT);
    assert_eq!(tally, UnreadCount { count: 0, saturated: false });
}

#[test]
fn mark_read_rejects_empty_id() {
    let client = NotificationsClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.mark_read("")), Err(ApiError::Validation(_))));
}
