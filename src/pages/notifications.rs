//! Notification feed with read-state controls.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::guard::RequireRole;
use crate::net::api::Api;
use crate::state::toast::ToastState;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    view! {
        <RequireRole>
            <NotificationsContent/>
        </RequireRole>
    }
}

#[component]
fn NotificationsContent() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let feed = LocalResource::new({
        let api = api.clone();
        move || {
            let notifications = api.notifications.clone();
            async move { notifications.list(None, None).await }
        }
    });

    let mark_one = {
        let api = api.clone();
        move |notification_id: String| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.notifications.mark_read(&notification_id).await {
                        Ok(()) => feed.refetch(),
                        Err(err) => {
                            toasts.update(|t| {
                                t.push_error(&format!("Could not mark as read: {err}"));
                            });
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (notification_id, &api, toasts);
            }
        }
    };

    let mark_all = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.notifications.mark_all_read().await {
                    Ok(()) => feed.refetch(),
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not mark all as read: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, toasts);
        }
    };

    view! {
        <div class="notifications">
            <header class="notifications__header">
                <h1>"Notifications"</h1>
                <button class="btn" on:click=mark_all>
                    "Mark all read"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Loading notifications..."</p> }>
                {move || {
                    feed.get()
                        .map(|outcome| match outcome {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"Nothing here yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="notifications__list">
                                        {list
                                            .into_iter()
                                            .map(|notification| {
                                                let id = notification.id.clone();
                                                let mark = mark_one.clone();
                                                let unread = !notification.read;
                                                view! {
                                                    <li
                                                        class="notifications__entry"
                                                        class=("notifications__entry--unread", move || unread)
                                                    >
                                                        <span class="notifications__message">
                                                            {notification.message.clone()}
                                                        </span>
                                                        <span class="notifications__time">
                                                            {notification.created_at.clone()}
                                                        </span>
                                                        <Show when=move || unread>
                                                            <button
                                                                class="notifications__mark"
                                                                on:click={
                                                                    let mark = mark.clone();
                                                                    let id = id.clone();
                                                                    move |_| mark(id.clone())
                                                                }
                                                            >
                                                                "Mark read"
                                                            </button>
                                                        </Show>
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
                                        on_retry=Callback::new(move |()| feed.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
