//! Follow/unfollow endpoints for org profiles.

#[cfg(test)]
#[path = "follows_test.rs"]
mod follows_test;

use serde::{Deserialize, Serialize};

use crate::net::error::{ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::{Ack, OrgSummary};

fn do_i_follow_endpoint(org_id: &str) -> String {
    format!("/api/follow/doIFollow/{org_id}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FollowBody {
    org_id: String,
}

#[derive(Debug, Deserialize)]
struct FollowFlag {
    following: bool,
}

#[derive(Clone)]
pub struct FollowsClient {
    http: Http,
}

impl FollowsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Whether the calling actor follows an org.
    pub async fn do_i_follow(&self, org_id: &str) -> ApiResult<bool> {
        let org_id = require_id("orgId", org_id)?;
        let flag: FollowFlag = self.http.get_auth(&do_i_follow_endpoint(&org_id)).await?;
        Ok(flag.following)
    }

    /// Start following. Following an already-followed org is a no-op on the
    /// backend, so the round trip stays idempotent.
    pub async fn follow(&self, org_id: &str) -> ApiResult<()> {
        let org_id = require_id("orgId", org_id)?;
        let _: Ack = self.http.post_auth("/api/follow", &FollowBody { org_id }).await?;
        Ok(())
    }

    /// Stop following.
    pub async fn unfollow(&self, org_id: &str) -> ApiResult<()> {
        let org_id = require_id("orgId", org_id)?;
        let _: Ack = self.http.post_auth("/api/unfollow", &FollowBody { org_id }).await?;
        Ok(())
    }

    /// Orgs the calling actor follows.
    pub async fn my_follows(&self) -> ApiResult<Vec<OrgSummary>> {
        self.http.get_auth("/api/follow/myFollows").await
    }
}
