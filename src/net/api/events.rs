//! Event catalog endpoints.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::{Http, MultipartForm, Query};
use crate::net::types::{Ack, Event};

fn event_endpoint(event_id: &str) -> String {
    format!("/api/events/{event_id}")
}

fn org_events_endpoint(org_id: &str) -> String {
    format!("/api/events/org/{org_id}")
}

fn update_endpoint(event_id: &str) -> String {
    format!("/api/events/update/{event_id}")
}

/// Optional filters for the public event feed.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    pub category: Option<String>,
    pub city: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl EventFilter {
    fn into_query(self) -> Query {
        Query::new()
            .push_opt("category", self.category.as_deref())
            .push_opt("city", self.city.as_deref())
            .push_num("page", self.page)
            .push_num("limit", self.limit)
    }
}

/// Fields for creating or editing an event. The poster image travels as a
/// separate multipart file part.
#[derive(Clone, Debug)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub venue: Option<String>,
    /// ISO 8601 start date.
    pub date: String,
    pub donation_enabled: bool,
    pub volunteers_needed: Option<u32>,
}

impl EventDraft {
    fn into_form(self) -> MultipartForm {
        MultipartForm::new()
            .text("title", &self.title)
            .text_opt("description", self.description.as_deref())
            .text_opt("category", self.category.as_deref())
            .text_opt("city", self.city.as_deref())
            .text_opt("venue", self.venue.as_deref())
            .text("date", &self.date)
            .flag("donationEnabled", self.donation_enabled)
            .text_opt("volunteersNeeded", self.volunteers_needed.map(|n| n.to_string()).as_deref())
    }
}

#[derive(Clone)]
pub struct EventsClient {
    http: Http,
}

impl EventsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Public event feed.
    pub async fn list(&self, filter: EventFilter) -> ApiResult<Vec<Event>> {
        self.http.get_query("/api/events", filter.into_query()).await
    }

    /// One event by id (public).
    pub async fn get(&self, event_id: &str) -> ApiResult<Event> {
        let event_id = require_id("eventId", event_id)?;
        self.http.get(&event_endpoint(&event_id)).await
    }

    /// Every event hosted by an org (public).
    pub async fn by_org(&self, org_id: &str) -> ApiResult<Vec<Event>> {
        let org_id = require_id("orgId", org_id)?;
        self.http.get(&org_events_endpoint(&org_id)).await
    }

    /// Create an event, optionally with a poster image.
    pub async fn create(
        &self,
        draft: EventDraft,
        #[cfg(feature = "hydrate")] image: Option<web_sys::File>,
    ) -> ApiResult<Event> {
        #[allow(unused_mut)]
        let mut form = draft.into_form();
        #[cfg(feature = "hydrate")]
        if let Some(image) = image {
            form = form.file("image", image);
        }
        self.http.post_multipart_auth("/api/events/create", form).await
    }

    /// Replace an event's fields; the image is only touched when a new file
    /// is attached.
    pub async fn update(
        &self,
        event_id: &str,
        draft: EventDraft,
        #[cfg(feature = "hydrate")] image: Option<web_sys::File>,
    ) -> ApiResult<Event> {
        let event_id = require_id("eventId", event_id)?;
        #[allow(unused_mut)]
        let mut form = draft.into_form();
        #[cfg(feature = "hydrate")]
        if let Some(image) = image {
            form = form.file("image", image);
        }
        self.http.put_multipart_auth(&update_endpoint(&event_id), form).await
    }

    /// Delete an event. The backend cascades volunteers and attendance.
    pub async fn delete(&self, event_id: &str) -> ApiResult<()> {
        let event_id = require_id("eventId", event_id)?;
        let _: Ack = self.http.delete_auth(&event_endpoint(&event_id)).await?;
        Ok(())
    }
}
