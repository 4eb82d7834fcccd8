//! Notification endpoints.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::Serialize;

use crate::net::error::{ApiResult, require_id};
use crate::net::http::{Http, Query};
use crate::net::types::{Ack, Notification};

/// How many unread items the badge counter will scan.
///
/// The backend has no true-count endpoint, so the count is exact only up to
/// this window and saturates beyond it. `UnreadCount::saturated` tells the
/// UI to render "99+"-style badges instead of a wrong number.
pub const UNREAD_SCAN_LIMIT: u32 = 200;

fn mark_read_endpoint(notification_id: &str) -> String {
    format!("/api/notifications/{notification_id}/read")
}

#[derive(Debug, Serialize)]
struct MarkReadBody {
    read: bool,
}

/// Unread tally derived from a bounded scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnreadCount {
    pub count: usize,
    pub saturated: bool,
}

impl UnreadCount {
    /// Badge label; saturated counts render with a trailing `+`.
    pub fn badge(self) -> String {
        if self.saturated {
            format!("{}+", self.count)
        } else {
            self.count.to_string()
        }
    }
}

fn tally_unread(items: &[Notification], window: u32) -> UnreadCount {
    let count = items.iter().filter(|n| !n.read).count();
    UnreadCount {
        count,
        saturated: items.len() >= window as usize,
    }
}

#[derive(Clone)]
pub struct NotificationsClient {
    http: Http,
}

impl NotificationsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Paginated notification feed, newest first.
    pub async fn list(&self, page: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Notification>> {
        let query = Query::new().push_num("page", page).push_num("limit", limit);
        self.http.get_auth_query("/api/notifications", query).await
    }

    /// Mark one notification read.
    pub async fn mark_read(&self, notification_id: &str) -> ApiResult<()> {
        let notification_id = require_id("notificationId", notification_id)?;
        let _: Ack = self
            .http
            .patch_auth(&mark_read_endpoint(&notification_id), &MarkReadBody { read: true })
            .await?;
        Ok(())
    }

    /// Mark everything read.
    pub async fn mark_all_read(&self) -> ApiResult<()> {
        let _: Ack = self.http.patch_auth("/api/notifications/read-all", &MarkReadBody { read: true }).await?;
        Ok(())
    }

    /// Badge count from a bounded unread scan; see [`UNREAD_SCAN_LIMIT`].
    pub async fn unread_count(&self) -> ApiResult<UnreadCount> {
        let query = Query::new()
            .push("unreadOnly", "true")
            .push_num("limit", Some(UNREAD_SCAN_LIMIT));
        let items: Vec<Notification> = self.http.get_auth_query("/api/notifications", query).await?;
        Ok(tally_unread(&items, UNREAD_SCAN_LIMIT))
    }
}
