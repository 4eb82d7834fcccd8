//! Admin org-verification endpoints. All server-side gated to admin actors.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::Serialize;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::{OrgDocs, OrgSummary};

fn docs_endpoint(org_id: &str) -> String {
    format!("/api/admin/orgs/{org_id}/docs")
}

fn verify_endpoint(org_id: &str) -> String {
    format!("/api/admin/orgs/{org_id}/verify")
}

#[derive(Debug, Serialize)]
struct VerifyBody {
    approved: bool,
}

#[derive(Clone)]
pub struct AdminClient {
    http: Http,
}

impl AdminClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Orgs awaiting document review.
    pub async fn unverified_orgs(&self) -> ApiResult<Vec<OrgSummary>> {
        self.http.get_auth("/api/admin/orgs/unverified").await
    }

    /// Verification documents an org uploaded.
    pub async fn org_docs(&self, org_id: &str) -> ApiResult<OrgDocs> {
        let org_id = require_id("orgId", org_id)?;
        self.http.get_auth(&docs_endpoint(&org_id)).await
    }

    /// Grant or refuse verification.
    pub async fn set_verification(&self, org_id: &str, approved: bool) -> ApiResult<OrgSummary> {
        let org_id = require_id("orgId", org_id)?;
        self.http.patch_auth(&verify_endpoint(&org_id), &VerifyBody { approved }).await
    }
}
