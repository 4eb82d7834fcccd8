//! Signed-in member home: event feed, followed orgs, and activity history.
//!
//! Org actors never see this screen; the guard's dashboard override routes
//! them to `/dashboard` before the allow-list check runs.

#[cfg(test)]
#[path = "user_home_test.rs"]
mod user_home_test;

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::event_card::EventCard;
use crate::components::guard::RequireRole;
use crate::net::api::Api;
use crate::net::api::events::EventFilter;
use crate::net::types::{ActivityKind, RequestStatus, Role};

#[component]
pub fn UserHomePage() -> impl IntoView {
    view! {
        <RequireRole allow=&[Role::User] redirect_to_dashboard=true>
            <UserHomeContent/>
        </RequireRole>
    }
}

#[component]
fn UserHomeContent() -> impl IntoView {
    let api = expect_context::<Api>();

    let feed = LocalResource::new({
        let api = api.clone();
        move || {
            let events = api.events.clone();
            async move { events.list(EventFilter::default()).await }
        }
    });

    let follows = LocalResource::new({
        let api = api.clone();
        move || {
            let follows = api.follows.clone();
            async move { follows.my_follows().await }
        }
    });

    let activity = LocalResource::new(move || {
        let users = api.users.clone();
        async move { users.my_activity().await }
    });

    view! {
        <div class="user-home">
            <section class="user-home__feed">
                <h2>"Upcoming events"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        feed.get()
                            .map(|outcome| match outcome {
                                Ok(events) => {
                                    view! {
                                        <div class="user-home__cards">
                                            {events
                                                .into_iter()
                                                .map(|event| view! { <EventCard event=event/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| feed.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <aside class="user-home__side">
                <h3>"Organizations you follow"</h3>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        follows
                            .get()
                            .map(|outcome| match outcome {
                                Ok(orgs) if orgs.is_empty() => {
                                    view! { <p>"You are not following anyone yet."</p> }.into_any()
                                }
                                Ok(orgs) => {
                                    view! {
                                        <ul class="user-home__follows">
                                            {orgs
                                                .into_iter()
                                                .map(|org| {
                                                    let href = format!("/org/{}", org.id);
                                                    view! {
                                                        <li>
                                                            <a href=href>{org.name}</a>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| follows.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <h3>"My activity"</h3>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        activity
                            .get()
                            .map(|outcome| match outcome {
                                Ok(records) => {
                                    view! {
                                        <ul class="user-home__activity">
                                            {records
                                                .into_iter()
                                                .map(|record| {
                                                    let href = format!("/event/{}", record.event_id);
                                                    let badge = activity_badge(record.kind, record.status);
                                                    view! {
                                                        <li>
                                                            <a href=href>{record.event_title}</a>
                                                            <span class="user-home__badge">{badge}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| activity.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </aside>
        </div>
    }
}

/// Human label for one activity entry.
fn activity_badge(kind: ActivityKind, status: Option<RequestStatus>) -> &'static str {
    match (kind, status) {
        (ActivityKind::Attending, _) => "attending",
        (ActivityKind::Volunteering, Some(RequestStatus::Approved)) => "volunteer",
        (ActivityKind::Volunteering, Some(RequestStatus::Rejected)) => "not selected",
        (ActivityKind::Volunteering, _) => "volunteer (pending)",
    }
}
