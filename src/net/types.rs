//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Every entity here is a short-lived, non-authoritative copy of backend
//! state, scoped to the lifetime of a screen: fetched, displayed, optionally
//! re-fetched, never persisted locally. The actor shape is a closed tagged
//! union so every role branch is matched exhaustively instead of poking at
//! optional fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Route the login screen lives at.
pub const LOGIN_PATH: &str = "/login";

/// Route of the org management dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Actor role behind a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Org,
    Admin,
}

impl Role {
    /// Home screen for each role; role-mismatch redirects land here.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::User => "/user/home",
            Role::Org => "/org/home",
            Role::Admin => "/admin/orgs",
        }
    }
}

/// The authenticated identity behind a session.
///
/// Resolved from the backend on every `verify()`; the client holds no
/// independent source of truth for who is logged in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Actor {
    User(UserAccount),
    Org(OrgAccount),
    Admin(AdminAccount),
}

impl Actor {
    pub fn role(&self) -> Role {
        match self {
            Actor::User(_) => Role::User,
            Actor::Org(_) => Role::Org,
            Actor::Admin(_) => Role::Admin,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Actor::User(a) => &a.id,
            Actor::Org(a) => &a.id,
            Actor::Admin(a) => &a.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Actor::User(a) => &a.name,
            Actor::Org(a) => &a.name,
            Actor::Admin(a) => &a.name,
        }
    }

    /// Where this actor lands after login.
    pub fn home_path(&self) -> &'static str {
        self.role().home_path()
    }
}

/// A regular community member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// An organization account. `verified` is granted by an admin after document
/// review and gates org-only surfaces like event hosting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A platform administrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Bare acknowledgement body returned by toggle- and delete-style endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// A community event hosted by an org.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    /// ISO 8601 start date.
    pub date: String,
    pub org_id: String,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub donation_enabled: bool,
    #[serde(default)]
    pub volunteers_needed: Option<u32>,
}

/// Compact org shape used in lists and search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Aggregates shown on the org dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub events_hosted: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub volunteers_pending: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub followers: i64,
    /// Lifetime donations received, in paise.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub donations_total: i64,
}

/// Lifecycle of a two-party request (volunteering, collaboration).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// A notification delivered to the current actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

/// A review left on an org profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub org_id: String,
    pub user_name: String,
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

/// A chat conversation between the current actor and one counterpart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub peer_id: String,
    pub peer_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One message within a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    pub created_at: String,
}

/// An org-to-org collaboration request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollabRequest {
    pub id: String,
    pub org_id: String,
    pub org_name: String,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
}

/// A recorded donation. Amounts are always in paise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub event_id: String,
    /// Absent when the donor chose to stay anonymous.
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub amount: u64,
    pub created_at: String,
}

/// A payment-gateway order created ahead of checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    /// Order total in paise.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub amount: u64,
    pub currency: String,
}

/// A volunteer signed up for an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRecord {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub status: RequestStatus,
}

/// An attendee of an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub user_id: String,
    pub user_name: String,
}

/// Grouped results from the full-search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub orgs: Vec<OrgSummary>,
}

/// What a suggestion points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Event,
    Org,
}

/// One typeahead suggestion from the search box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub label: String,
    pub kind: SuggestionKind,
}

/// A verification document uploaded by an org.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocFile {
    pub name: String,
    pub url: String,
}

/// The document set an admin reviews before verifying an org.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgDocs {
    pub org_id: String,
    #[serde(default)]
    pub files: Vec<DocFile>,
}

/// One entry in a user's activity history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub event_id: String,
    pub event_title: String,
    pub kind: ActivityKind,
    #[serde(default)]
    pub status: Option<RequestStatus>,
}

/// Whether a history entry came from attending or volunteering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Attending,
    Volunteering,
}

/// The backend occasionally emits whole-valued floats where integers are
/// expected (aggregates computed in JavaScript). Accept both.
pub(crate) fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

pub(crate) fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u64")))
}
