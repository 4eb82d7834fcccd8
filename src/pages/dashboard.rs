//! Org management dashboard: stats, volunteer approvals, event creation.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::guard::RequireRole;
use crate::net::api::Api;
use crate::net::api::events::EventDraft;
use crate::net::types::{RequestStatus, Role};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::money;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireRole allow=&[Role::Org]>
            <DashboardContent/>
        </RequireRole>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let stats = LocalResource::new({
        let api = api.clone();
        move || {
            let orgs = api.orgs.clone();
            async move { orgs.dashboard().await }
        }
    });

    let events = LocalResource::new({
        let api = api.clone();
        move || {
            let client = api.events.clone();
            let org_id = auth.get().actor.map(|actor| actor.id().to_owned()).unwrap_or_default();
            async move { client.by_org(&org_id).await }
        }
    });

    let show_create = RwSignal::new(false);
    let selected_event = RwSignal::new(None::<String>);

    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Dashboard"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Event"
                </button>
            </header>

            <section class="dashboard__stats">
                <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                    {move || {
                        stats
                            .get()
                            .map(|outcome| match outcome {
                                Ok(loaded) => {
                                    view! {
                                        <dl class="dashboard__stat-grid">
                                            <dt>"Events hosted"</dt>
                                            <dd>{loaded.events_hosted}</dd>
                                            <dt>"Pending volunteers"</dt>
                                            <dd>{loaded.volunteers_pending}</dd>
                                            <dt>"Followers"</dt>
                                            <dd>{loaded.followers}</dd>
                                            <dt>"Donations received"</dt>
                                            <dd>
                                                {money::format_paise(loaded.donations_total.max(0).unsigned_abs())}
                                            </dd>
                                        </dl>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <ErrorPanel
                                            message=err.to_string()
                                            on_retry=Callback::new(move |()| stats.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard__events">
                <h2>"Volunteer approvals"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events
                            .get()
                            .map(|outcome| match outcome {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"Host an event to receive volunteers."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="dashboard__event-list">
                                            {list
                                                .into_iter()
                                                .map(|event| {
                                                    let id = event.id.clone();
                                                    let is_open = {
                                                        let id = id.clone();
                                                        move || selected_event.get().as_deref() == Some(id.as_str())
                                                    };
                                                    let toggle_id = id.clone();
                                                    view! {
                                                        <li class="dashboard__event">
                                                            <button
                                                                class="dashboard__event-name"
                                                                on:click=move |_| {
                                                                    let next = if selected_event.get().as_deref()
                                                                        == Some(toggle_id.as_str())
                                                                    {
                                                                        None
                                                                    } else {
                                                                        Some(toggle_id.clone())
                                                                    };
                                                                    selected_event.set(next);
                                                                }
                                                            >
                                                                {event.title.clone()}
                                                            </button>
                                                            <Show when=is_open>
                                                                <VolunteerRoster event_id=id.clone()/>
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
                                            on_retry=Callback::new(move |()| events.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <Show when=move || show_create.get()>
                <CreateEventDialog on_cancel=on_cancel events=events/>
            </Show>
        </div>
    }
}

/// Pending/approved volunteer roster for one event.
#[component]
fn VolunteerRoster(event_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let roster = LocalResource::new({
        let api = api.clone();
        let event_id = event_id.clone();
        move || {
            let volunteering = api.volunteering.clone();
            let event_id = event_id.clone();
            async move { volunteering.volunteers(&event_id).await }
        }
    });

    let decide = move |user_id: String, approve: bool| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let event_id = event_id.clone();
            leptos::task::spawn_local(async move {
                let result = if approve {
                    api.volunteering.approve(&event_id, &user_id).await
                } else {
                    api.volunteering.reject(&event_id, &user_id).await
                };
                match result {
                    Ok(()) => roster.refetch(),
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not update the volunteer: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, approve, &api, &event_id, toasts);
        }
    };

    view! {
        <div class="roster">
            <Suspense fallback=move || view! { <p>"Loading volunteers..."</p> }>
                {move || {
                    roster
                        .get()
                        .map(|outcome| match outcome {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No volunteers yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="roster__list">
                                        {list
                                            .into_iter()
                                            .map(|volunteer| {
                                                let approve_id = volunteer.user_id.clone();
                                                let reject_id = volunteer.user_id.clone();
                                                let decide_approve = decide.clone();
                                                let decide_reject = decide.clone();
                                                let pending = volunteer.status == RequestStatus::Pending;
                                                view! {
                                                    <li class="roster__entry">
                                                        <span>{volunteer.user_name.clone()}</span>
                                                        <span class="roster__status">
                                                            {volunteer.status.label()}
                                                        </span>
                                                        <Show when=move || pending>
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click={
                                                                    let decide = decide_approve.clone();
                                                                    let id = approve_id.clone();
                                                                    move |_| decide(id.clone(), true)
                                                                }
                                                            >
                                                                "Approve"
                                                            </button>
                                                            <button
                                                                class="btn"
                                                                on:click={
                                                                    let decide = decide_reject.clone();
                                                                    let id = reject_id.clone();
                                                                    move |_| decide(id.clone(), false)
                                                                }
                                                            >
                                                                "Reject"
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
                                        on_retry=Callback::new(move |()| roster.refetch())
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

/// Modal dialog for creating a new event with an optional poster image.
#[component]
fn CreateEventDialog(
    on_cancel: Callback<()>,
    events: LocalResource<Result<Vec<crate::net::types::Event>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let title = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let donation_enabled = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let image_input = NodeRef::<leptos::html::Input>::new();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let date_value = date.get().trim().to_owned();
        if title_value.is_empty() || date_value.is_empty() {
            toasts.update(|t| {
                t.push_error("A title and a date are required.");
            });
            return;
        }
        busy.set(true);

        let draft = EventDraft {
            title: title_value,
            description: None,
            category: None,
            city: Some(city.get()).filter(|c| !c.trim().is_empty()),
            venue: None,
            date: date_value,
            donation_enabled: donation_enabled.get(),
            volunteers_needed: None,
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let image = image_input.get().and_then(|input| input.files()).and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                match api.events.create(draft, image).await {
                    Ok(_) => {
                        events.refetch();
                        on_cancel.run(());
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not create the event: {err}"));
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, &api, events);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Event"</h2>
                <form class="dialog__form" on:submit=submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Date"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "City"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || city.get()
                            on:input=move |ev| city.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Poster image"
                        <input type="file" accept="image/*" node_ref=image_input/>
                    </label>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || donation_enabled.get()
                            on:change=move |_| donation_enabled.update(|v| *v = !*v)
                        />
                        "Accept donations"
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
