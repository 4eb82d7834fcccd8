//! Header bell linking to the notification feed with an unread badge.
//!
//! The badge comes from a bounded unread scan; saturated counts render with
//! a trailing `+` instead of pretending to be exact.

use leptos::prelude::*;

use crate::net::api::Api;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let api = expect_context::<Api>();

    let unread = LocalResource::new(move || {
        let notifications = api.notifications.clone();
        async move { notifications.unread_count().await.ok() }
    });

    view! {
        <a class="notification-bell" href="/notifications" title="Notifications">
            "\u{1f514}"
            {move || {
                unread
                    .get()
                    .flatten()
                    .filter(|count| count.count > 0)
                    .map(|count| view! { <span class="notification-bell__badge">{count.badge()}</span> })
            }}
        </a>
    }
}
