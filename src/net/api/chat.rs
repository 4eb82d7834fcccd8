//! Direct-message chat endpoints.
//!
//! Chat here is plain REST (list, send, re-fetch) with no socket or
//! push channel; threads refresh when the viewing screen re-fetches.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::Serialize;

use crate::net::error::{ApiError, ApiResult, require_id};
use crate::net::http::{Http, Query};
use crate::net::types::{ChatMessage, Conversation};

fn messages_endpoint(conversation_id: &str) -> String {
    format!("/api/chat/{conversation_id}/messages")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenBody {
    peer_id: String,
}

#[derive(Debug, Serialize)]
struct SendBody {
    content: String,
}

#[derive(Clone)]
pub struct ChatClient {
    http: Http,
}

impl ChatClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Every conversation the calling actor participates in.
    pub async fn conversations(&self) -> ApiResult<Vec<Conversation>> {
        self.http.get_auth("/api/chat/conversations").await
    }

    /// Open (or return the existing) conversation with a counterpart.
    pub async fn open(&self, peer_id: &str) -> ApiResult<Conversation> {
        let peer_id = require_id("peerId", peer_id)?;
        self.http.post_auth("/api/chat/conversations", &OpenBody { peer_id }).await
    }

    /// Messages in a conversation, oldest first.
    pub async fn messages(&self, conversation_id: &str, page: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<ChatMessage>> {
        let conversation_id = require_id("conversationId", conversation_id)?;
        let query = Query::new().push_num("page", page).push_num("limit", limit);
        self.http.get_auth_query(&messages_endpoint(&conversation_id), query).await
    }

    /// Append a message. Blank content is rejected locally.
    pub async fn send(&self, conversation_id: &str, content: &str) -> ApiResult<ChatMessage> {
        let conversation_id = require_id("conversationId", conversation_id)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(ApiError::Validation("message must not be empty".to_owned()));
        }
        self.http
            .post_auth(&messages_endpoint(&conversation_id), &SendBody { content: content.to_owned() })
            .await
    }
}
