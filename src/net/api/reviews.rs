//! Org review endpoints.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use serde::Serialize;

use crate::net::error::{ApiError, ApiResult, require_id};
use crate::net::http::{Http, Query};
use crate::net::types::Review;
use crate::util::rating;

fn org_reviews_endpoint(org_id: &str) -> String {
    format!("/api/reviews/org/{org_id}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewBody {
    org_id: String,
    rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

#[derive(Clone)]
pub struct ReviewsClient {
    http: Http,
}

impl ReviewsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Reviews left on an org profile (public).
    pub async fn for_org(&self, org_id: &str, page: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Review>> {
        let org_id = require_id("orgId", org_id)?;
        let query = Query::new().push_num("page", page).push_num("limit", limit);
        self.http.get_query(&org_reviews_endpoint(&org_id), query).await
    }

    /// Submit a review. The rating is snapped to the half-star scale before
    /// transmission; a rating that normalizes to zero is rejected.
    pub async fn submit(&self, org_id: &str, raw_rating: f64, comment: Option<&str>) -> ApiResult<Review> {
        let org_id = require_id("orgId", org_id)?;
        let normalized = rating::normalize(raw_rating);
        if normalized == 0.0 {
            return Err(ApiError::Validation("rating must be between half a star and five".to_owned()));
        }
        let body = ReviewBody {
            org_id,
            rating: normalized,
            comment: comment.map(str::trim).filter(|c| !c.is_empty()).map(str::to_owned),
        };
        self.http.post_auth("/api/reviews", &body).await
    }
}
