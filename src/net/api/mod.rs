//! Typed resource clients, one module per backend resource.
//!
//! DESIGN
//! ======
//! Each client is a thin mapping from typed arguments to a typed future:
//! required identifiers are validated before any network I/O, absent filters
//! are omitted from query strings, and nothing here retries, caches, or
//! dedupes; those decisions belong to callers. All clients share one
//! injected `Session` through the `Http` wrapper.

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod chat;
pub mod collab;
pub mod donations;
pub mod events;
pub mod follows;
pub mod notifications;
pub mod orgs;
pub mod payments;
pub mod reviews;
pub mod search;
pub mod users;
pub mod volunteering;

use crate::net::http::Http;
use crate::session::Session;

/// Bundle of every resource client, provided once as a Leptos context.
#[derive(Clone)]
pub struct Api {
    pub auth: auth::AuthClient,
    pub events: events::EventsClient,
    pub orgs: orgs::OrgsClient,
    pub users: users::UsersClient,
    pub follows: follows::FollowsClient,
    pub attendance: attendance::AttendanceClient,
    pub volunteering: volunteering::VolunteeringClient,
    pub donations: donations::DonationsClient,
    pub payments: payments::PaymentsClient,
    pub reviews: reviews::ReviewsClient,
    pub notifications: notifications::NotificationsClient,
    pub chat: chat::ChatClient,
    pub collab: collab::CollabClient,
    pub search: search::SearchClient,
    pub admin: admin::AdminClient,
}

impl Api {
    /// Build every client over one shared session.
    pub fn new(session: Session) -> Self {
        let http = Http::new(session);
        Self {
            auth: auth::AuthClient::new(http.clone()),
            events: events::EventsClient::new(http.clone()),
            orgs: orgs::OrgsClient::new(http.clone()),
            users: users::UsersClient::new(http.clone()),
            follows: follows::FollowsClient::new(http.clone()),
            attendance: attendance::AttendanceClient::new(http.clone()),
            volunteering: volunteering::VolunteeringClient::new(http.clone()),
            donations: donations::DonationsClient::new(http.clone()),
            payments: payments::PaymentsClient::new(http.clone()),
            reviews: reviews::ReviewsClient::new(http.clone()),
            notifications: notifications::NotificationsClient::new(http.clone()),
            chat: chat::ChatClient::new(http.clone()),
            collab: collab::CollabClient::new(http.clone()),
            search: search::SearchClient::new(http.clone()),
            admin: admin::AdminClient::new(http),
        }
    }
}
