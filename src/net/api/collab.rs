//! Org-to-org collaboration request endpoints.

#[cfg(test)]
#[path = "collab_test.rs"]
mod collab_test;

use serde::Serialize;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::{Ack, CollabRequest};

fn accept_endpoint(request_id: &str) -> String {
    format!("/api/collab/accept/{request_id}")
}

fn reject_endpoint(request_id: &str) -> String {
    format!("/api/collab/reject/{request_id}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody {
    org_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Clone)]
pub struct CollabClient {
    http: Http,
}

impl CollabClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Ask another org to collaborate, optionally around a specific event.
    pub async fn send_request(&self, org_id: &str, event_id: Option<&str>, message: Option<&str>) -> ApiResult<CollabRequest> {
        let org_id = require_id("orgId", org_id)?;
        let body = RequestBody {
            org_id,
            event_id: event_id.map(str::trim).filter(|e| !e.is_empty()).map(str::to_owned),
            message: message.map(str::trim).filter(|m| !m.is_empty()).map(str::to_owned),
        };
        self.http.post_auth("/api/collab/request", &body).await
    }

    /// Requests other orgs sent to the calling org.
    pub async fn incoming(&self) -> ApiResult<Vec<CollabRequest>> {
        self.http.get_auth("/api/collab/incoming").await
    }

    /// Requests the calling org sent out.
    pub async fn outgoing(&self) -> ApiResult<Vec<CollabRequest>> {
        self.http.get_auth("/api/collab/outgoing").await
    }

    pub async fn accept(&self, request_id: &str) -> ApiResult<()> {
        let request_id = require_id("requestId", request_id)?;
        let _: Ack = self.http.post_auth_empty(&accept_endpoint(&request_id)).await?;
        Ok(())
    }

    pub async fn reject(&self, request_id: &str) -> ApiResult<()> {
        let request_id = require_id("requestId", request_id)?;
        let _: Ack = self.http.post_auth_empty(&reject_endpoint(&request_id)).await?;
        Ok(())
    }
}
