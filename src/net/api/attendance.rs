//! Event attendance endpoints.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use serde::Deserialize;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::{Ack, Attendee};

fn attend_endpoint(event_id: &str) -> String {
    format!("/api/attendance/attend/{event_id}")
}

fn unattend_endpoint(event_id: &str) -> String {
    format!("/api/attendance/unattend/{event_id}")
}

fn is_me_attending_endpoint(event_id: &str) -> String {
    format!("/api/attendance/isMeAttending/{event_id}")
}

fn attendees_endpoint(event_id: &str) -> String {
    format!("/api/attendance/{event_id}")
}

#[derive(Debug, Deserialize)]
struct AttendingFlag {
    attending: bool,
}

#[derive(Clone)]
pub struct AttendanceClient {
    http: Http,
}

impl AttendanceClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn attend(&self, event_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let _: Ack = self.http.post_auth_empty(&attend_endpoint(&event_id)).await?;
        Ok(())
    }

    pub async fn unattend(&self, event_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let _: Ack = self.http.post_auth_empty(&unattend_endpoint(&event_id)).await?;
        Ok(())
    }

    pub async fn is_me_attending(&self, event_id: &str) -> ApiResult<bool> {
        let event_id = require_id("eventId", event_id)?;
        let flag: AttendingFlag = self.http.get_auth(&is_me_attending_endpoint(&event_id)).await?;
        Ok(flag.attending)
    }

    /// Everyone attending an event; visible to the hosting org.
    pub async fn attendees(&self, event_id: &str) -> ApiResult<Vec<Attendee>> {
        let event_id = require_id("eventId", event_id)?;
        self.http.get_auth(&attendees_endpoint(&event_id)).await
    }
}
