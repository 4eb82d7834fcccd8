//! Event detail page: info, attendance and volunteering toggles, donations.
//!
//! Both toggles follow the same optimistic shape: flip immediately, ticket
//! the dispatch through a `RequestSeq`, discard completions that are no
//! longer the latest intent, and revert with a toast when the latest
//! request fails.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_panel::ErrorPanel;
use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::Event;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::money;
use crate::util::seq::RequestSeq;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();

    let event_id = move || params.read().get("id").unwrap_or_default();

    let event = LocalResource::new({
        let api = api.clone();
        move || {
            let events = api.events.clone();
            let id = event_id();
            async move { events.get(&id).await }
        }
    });

    view! {
        <div class="event-page">
            <Suspense fallback=move || view! { <p>"Loading event..."</p> }>
                {move || {
                    event
                        .get()
                        .map(|outcome| match outcome {
                            Ok(loaded) => view! { <EventBody event=loaded/> }.into_any(),
                            Err(err) => {
                                view! {
                                    <ErrorPanel
                                        message=err.to_string()
                                        on_retry=Callback::new(move |()| event.refetch())
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

#[component]
fn EventBody(event: Event) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let org_href = format!("/org/{}", event.org_id);
    let toggle_event_id = event.id.clone();
    let donate_event_id = event.id.clone();
    let donation_enabled = event.donation_enabled;

    view! {
        <article class="event">
            <h1>{event.title.clone()}</h1>
            <p class="event__date">{event.date.clone()}</p>
            {event
                .org_name
                .clone()
                .map(|org| {
                    view! {
                        <a class="event__org" href=org_href.clone()>
                            {org}
                        </a>
                    }
                })}
            {event.venue.clone().map(|venue| view! { <p class="event__venue">{venue}</p> })}
            {event
                .description
                .clone()
                .map(|description| view! { <p class="event__description">{description}</p> })}

            <Show when=move || auth.get().is_authenticated()>
                <div class="event__actions">
                    <AttendToggle event_id=toggle_event_id.clone()/>
                    <VolunteerToggle event_id=toggle_event_id.clone()/>
                </div>
            </Show>

            <Show when=move || donation_enabled>
                <DonationSection event_id=donate_event_id.clone()/>
            </Show>
        </article>
    }
}

#[component]
fn AttendToggle(event_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let active = RwSignal::new(None::<bool>);
    let seq = StoredValue::new(RequestSeq::new());

    let initial = LocalResource::new({
        let api = api.clone();
        let event_id = event_id.clone();
        move || {
            let attendance = api.attendance.clone();
            let event_id = event_id.clone();
            async move { attendance.is_me_attending(&event_id).await.ok() }
        }
    });

    Effect::new(move || {
        if active.read().is_none()
            && let Some(Some(loaded)) = initial.get()
        {
            active.set(Some(loaded));
        }
    });

    let on_toggle = move |_| {
        let Some(current) = active.get() else {
            return;
        };
        let next = !current;
        active.set(Some(next));
        let ticket = seq.with_value(RequestSeq::begin);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let event_id = event_id.clone();
            leptos::task::spawn_local(async move {
                let result = if next {
                    api.attendance.attend(&event_id).await
                } else {
                    api.attendance.unattend(&event_id).await
                };
                if !seq.with_value(|s| s.is_current(ticket)) {
                    return;
                }
                if let Err(err) = result {
                    active.set(Some(current));
                    toasts.update(|t| {
                        t.push_error(&format!("Could not update attendance: {err}"));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, toasts);
        }
    };

    view! {
        <button class="event__toggle" disabled=move || active.get().is_none() on:click=on_toggle>
            {move || match active.get() {
                None => "...",
                Some(true) => "Attending \u{2713}",
                Some(false) => "Attend",
            }}
        </button>
    }
}

#[component]
fn VolunteerToggle(event_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let active = RwSignal::new(None::<bool>);
    let seq = StoredValue::new(RequestSeq::new());

    let initial = LocalResource::new({
        let api = api.clone();
        let event_id = event_id.clone();
        move || {
            let volunteering = api.volunteering.clone();
            let event_id = event_id.clone();
            async move { volunteering.is_me_volunteering(&event_id).await.ok() }
        }
    });

    Effect::new(move || {
        if active.read().is_none()
            && let Some(Some(loaded)) = initial.get()
        {
            active.set(Some(loaded));
        }
    });

    let on_toggle = move |_| {
        let Some(current) = active.get() else {
            return;
        };
        let next = !current;
        active.set(Some(next));
        let ticket = seq.with_value(RequestSeq::begin);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let event_id = event_id.clone();
            leptos::task::spawn_local(async move {
                let result = if next {
                    api.volunteering.volunteer(&event_id).await
                } else {
                    api.volunteering.unvolunteer(&event_id).await
                };
                if !seq.with_value(|s| s.is_current(ticket)) {
                    return;
                }
                if let Err(err) = result {
                    active.set(Some(current));
                    toasts.update(|t| {
                        t.push_error(&format!("Could not update volunteering: {err}"));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, toasts);
        }
    };

    view! {
        <button class="event__toggle" disabled=move || active.get().is_none() on:click=on_toggle>
            {move || match active.get() {
                None => "...",
                Some(true) => "Volunteering \u{2713}",
                Some(false) => "Volunteer",
            }}
        </button>
    }
}

#[component]
fn DonationSection(event_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let amount = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let donations = LocalResource::new({
        let api = api.clone();
        let event_id = event_id.clone();
        move || {
            let client = api.donations.clone();
            let event_id = event_id.clone();
            async move { client.by_event(&event_id).await }
        }
    });

    let on_donate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        // Local validation first: malformed amounts never reach the network.
        if let Err(message) = money::parse_rupees_to_paise(&amount.get()) {
            toasts.update(|t| {
                t.push_error(message);
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let entered = amount.get();
            leptos::task::spawn_local(async move {
                match api.payments.create_order(&entered).await {
                    Ok(order) => {
                        toasts.update(|t| {
                            t.push_success(&format!(
                                "Order {} created for {}. Complete the payment in the gateway window.",
                                order.order_id,
                                money::format_paise(order.amount),
                            ));
                        });
                        amount.set(String::new());
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not start the donation: {err}"));
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
            busy.set(false);
        }
    };

    view! {
        <section class="event__donations">
            <h2>"Donations"</h2>
            <Show when=move || auth.get().is_authenticated()>
                <form class="event__donate-form" on:submit=on_donate.clone()>
                    <input
                        class="event__donate-amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="Amount in \u{20b9}"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Donate"
                    </button>
                </form>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading donations..."</p> }>
                {move || {
                    donations
                        .get()
                        .map(|outcome| match outcome {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"Be the first to donate."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="event__donation-list">
                                        {list
                                            .into_iter()
                                            .map(|donation| {
                                                let donor = donation
                                                    .donor_name
                                                    .unwrap_or_else(|| "Anonymous".to_owned());
                                                let amount = money::format_paise(donation.amount);
                                                view! { <li>{donor}" \u{b7} "{amount}</li> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            // Donations are bearer-gated; anonymous visitors
                            // get a prompt instead of an error panel.
                            Err(ApiError::Unauthorized) => {
                                view! { <p>"Sign in to see donations."</p> }.into_any()
                            }
                            Err(err) => {
                                view! {
                                    <ErrorPanel
                                        message=err.to_string()
                                        on_retry=Callback::new(move |()| donations.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
