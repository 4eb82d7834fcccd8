//! Org profile and dashboard endpoints.

#[cfg(test)]
#[path = "orgs_test.rs"]
mod orgs_test;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::{Http, MultipartForm, Query};
use crate::net::types::{DashboardStats, OrgAccount, OrgSummary};

fn org_endpoint(org_id: &str) -> String {
    format!("/api/orgs/{org_id}")
}

/// Editable org profile fields. The logo and verification documents travel
/// as multipart file parts.
#[derive(Clone, Debug, Default)]
pub struct OrgProfileDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

impl OrgProfileDraft {
    fn into_form(self) -> MultipartForm {
        MultipartForm::new()
            .text_opt("name", self.name.as_deref())
            .text_opt("description", self.description.as_deref())
            .text_opt("website", self.website.as_deref())
    }
}

#[derive(Clone)]
pub struct OrgsClient {
    http: Http,
}

impl OrgsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Public org profile.
    pub async fn get(&self, org_id: &str) -> ApiResult<OrgAccount> {
        let org_id = require_id("orgId", org_id)?;
        self.http.get(&org_endpoint(&org_id)).await
    }

    /// Public org directory.
    pub async fn list(&self, page: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<OrgSummary>> {
        let query = Query::new().push_num("page", page).push_num("limit", limit);
        self.http.get_query("/api/orgs", query).await
    }

    /// Update the calling org's own profile. `logo` replaces the current
    /// logo; `documents` are appended to the verification queue.
    pub async fn update_profile(
        &self,
        draft: OrgProfileDraft,
        #[cfg(feature = "hydrate")] logo: Option<web_sys::File>,
        #[cfg(feature = "hydrate")] documents: Vec<web_sys::File>,
    ) -> ApiResult<OrgAccount> {
        #[allow(unused_mut)]
        let mut form = draft.into_form();
        #[cfg(feature = "hydrate")]
        {
            if let Some(logo) = logo {
                form = form.file("logo", logo);
            }
            for doc in documents {
                form = form.file("documents", doc);
            }
        }
        self.http.put_multipart_auth("/api/orgs/profile", form).await
    }

    /// Aggregates for the org management dashboard.
    pub async fn dashboard(&self) -> ApiResult<DashboardStats> {
        self.http.get_auth("/api/orgs/dashboard").await
    }
}
