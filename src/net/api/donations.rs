//! Donation record endpoints.
//!
//! Amounts cross the wire in paise (minor units). Conversion from
//! user-entered rupees happens in `util::money` before anything reaches
//! this client.

#[cfg(test)]
#[path = "donations_test.rs"]
mod donations_test;

use serde::Serialize;

use crate::net::error::{ApiError, ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::Donation;

fn event_donations_endpoint(event_id: &str) -> String {
    format!("/api/donation/{event_id}")
}

fn user_donations_endpoint(user_id: &str) -> String {
    format!("/api/donation/user/{user_id}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DonationBody {
    event_id: String,
    /// Paise.
    amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Clone)]
pub struct DonationsClient {
    http: Http,
}

impl DonationsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Record a donation against an event after the gateway confirms it.
    pub async fn donate(&self, event_id: &str, amount_paise: u64, message: Option<&str>) -> ApiResult<Donation> {
        let event_id = require_id("eventId", event_id)?;
        if amount_paise == 0 {
            return Err(ApiError::Validation("amount must be greater than zero".to_owned()));
        }
        let body = DonationBody {
            event_id,
            amount: amount_paise,
            message: message.map(str::trim).filter(|m| !m.is_empty()).map(str::to_owned),
        };
        self.http.post_auth("/api/donation", &body).await
    }

    /// Donations received by one event.
    pub async fn by_event(&self, event_id: &str) -> ApiResult<Vec<Donation>> {
        let event_id = require_id("eventId", event_id)?;
        self.http.get_auth(&event_donations_endpoint(&event_id)).await
    }

    /// Donations made by one user.
    pub async fn by_user(&self, user_id: &str) -> ApiResult<Vec<Donation>> {
        let user_id = require_id("userId", user_id)?;
        self.http.get_auth(&user_donations_endpoint(&user_id)).await
    }
}
