use futures::executor::block_on;

use super::*;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn messages_endpoint_formats_expected_path() {
    assert_eq!(messages_endpoint("c-1"), "/api/chat/c-1/messages");
}

#[test]
fn send_rejects_blank_content() {
    let client = ChatClient::new(Http::new(Session::in_memory()));
    assert!(matches!(
        block_on(client.send("c-1", "   ")),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn send_rejects_missing_conversation_id() {
    let client = ChatClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.send("", "hi")), Err(ApiError::Validation(_))));
}

#[test]
fn open_rejects_missing_peer_id() {
    let client = ChatClient::new(Http::new(Session::in_memory()));
    assert!(matches!(block_on(client.open(" ")), Err(ApiError::Validation(_))));
}

#[test]
fn open_body_serializes_camel_case() {
    let body = OpenBody { peer_id: "o-2".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"peerId": "o-2"}));
}
