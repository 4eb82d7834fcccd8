//! Public search endpoints.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::{ApiError, ApiResult};
use crate::net::http::{Http, Query};
use crate::net::types::{SearchResults, Suggestion};

/// Narrow a full search to one entity kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchScope {
    Events,
    Orgs,
}

impl SearchScope {
    fn as_param(self) -> &'static str {
        match self {
            SearchScope::Events => "events",
            SearchScope::Orgs => "orgs",
        }
    }
}

fn search_query(q: &str, scope: Option<SearchScope>, page: Option<u32>, limit: Option<u32>) -> Query {
    Query::new()
        .push("q", q)
        .push_opt("type", scope.map(SearchScope::as_param))
        .push_num("page", page)
        .push_num("limit", limit)
}

#[derive(Clone)]
pub struct SearchClient {
    http: Http,
}

impl SearchClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Full search across events and orgs.
    pub async fn search(&self, q: &str, scope: Option<SearchScope>, page: Option<u32>, limit: Option<u32>) -> ApiResult<SearchResults> {
        let q = q.trim();
        if q.is_empty() {
            return Err(ApiError::Validation("search query must not be empty".to_owned()));
        }
        self.http.get_query("/api/search", search_query(q, scope, page, limit)).await
    }

    /// Typeahead suggestions. Suggestions are advisory; callers discard
    /// stale responses rather than cancelling them.
    pub async fn suggest(&self, q: &str) -> ApiResult<Vec<Suggestion>> {
        let q = q.trim();
        if q.is_empty() {
            return Ok(Vec::new());
        }
        self.http.get_query("/api/search/suggest", Query::new().push("q", q)).await
    }
}
