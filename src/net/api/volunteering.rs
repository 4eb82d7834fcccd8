//! Volunteering signup and approval endpoints.

#[cfg(test)]
#[path = "volunteering_test.rs"]
mod volunteering_test;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::{Ack, VolunteerRecord};

fn volunteer_endpoint(event_id: &str) -> String {
    format!("/api/volunteer/volunteer/{event_id}")
}

fn unvolunteer_endpoint(event_id: &str) -> String {
    format!("/api/volunteer/unvolunteer/{event_id}")
}

fn approve_endpoint(event_id: &str, user_id: &str) -> String {
    format!("/api/volunteer/approve/{event_id}/{user_id}")
}

fn reject_endpoint(event_id: &str, user_id: &str) -> String {
    format!("/api/volunteer/reject/{event_id}/{user_id}")
}

fn is_me_volunteering_endpoint(event_id: &str) -> String {
    format!("/api/volunteer/isMeVolunteering/{event_id}")
}

fn volunteers_endpoint(event_id: &str) -> String {
    format!("/api/volunteer/{event_id}")
}

#[derive(Debug, serde::Deserialize)]
struct VolunteeringFlag {
    volunteering: bool,
}

#[derive(Clone)]
pub struct VolunteeringClient {
    http: Http,
}

impl VolunteeringClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Sign the calling user up as a volunteer (lands as `pending`).
    pub async fn volunteer(&self, event_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let _: Ack = self.http.post_auth_empty(&volunteer_endpoint(&event_id)).await?;
        Ok(())
    }

    /// Withdraw a signup regardless of its approval state.
    pub async fn unvolunteer(&self, event_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let _: Ack = self.http.post_auth_empty(&unvolunteer_endpoint(&event_id)).await?;
        Ok(())
    }

    /// Approve a pending volunteer (hosting org only).
    pub async fn approve(&self, event_id: &str, user_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let user_id = require_id("userId", user_id)?;
        let _: Ack = self.http.post_auth_empty(&approve_endpoint(&event_id, &user_id)).await?;
        Ok(())
    }

    /// Reject a pending volunteer (hosting org only).
    pub async fn reject(&self, event_id: &str, user_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let user_id = require_id("userId", user_id)?;
        let _: Ack = self.http.post_auth_empty(&reject_endpoint(&event_id, &user_id)).await?;
        Ok(())
    }

    /// Whether the calling user has signed up for an event.
    pub async fn is_me_volunteering(&self, event_id: &str) -> ApiResult<bool> {
        let event_id = require_id("eventId", event_id)?;
        let flag: VolunteeringFlag = self.http.get_auth(&is_me_volunteering_endpoint(&event_id)).await?;
        Ok(flag.volunteering)
    }

    /// Volunteer roster for an event (hosting org only).
    pub async fn volunteers(&self, event_id: &str) -> ApiResult<Vec<VolunteerRecord>> {
        let event_id = require_id("eventId", event_id)?;
        self.http.get_auth(&volunteers_endpoint(&event_id)).await
    }
}
