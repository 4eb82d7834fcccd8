//! Public org profile: details, follow button, events, and reviews.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_panel::ErrorPanel;
use crate::components::event_card::EventCard;
use crate::components::follow_button::FollowButton;
use crate::components::star_rating::StarRating;
use crate::net::api::Api;
use crate::net::types::{Actor, OrgAccount};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn OrgProfilePage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();

    let org_id = move || params.read().get("id").unwrap_or_default();

    let org = LocalResource::new({
        let api = api.clone();
        move || {
            let orgs = api.orgs.clone();
            let id = org_id();
            async move { orgs.get(&id).await }
        }
    });

    view! {
        <div class="org-page">
            <Suspense fallback=move || view! { <p>"Loading organization..."</p> }>
                {move || {
                    org.get()
                        .map(|outcome| match outcome {
                            Ok(loaded) => view! { <OrgBody org=loaded/> }.into_any(),
                            Err(err) => {
                                view! {
                                    <ErrorPanel
                                        message=err.to_string()
                                        on_retry=Callback::new(move |()| org.refetch())
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
fn OrgBody(org: OrgAccount) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let org_id = org.id.clone();
    let follow_org_id = org.id.clone();
    let collab_org_id = org.id.clone();

    let events = LocalResource::new({
        let api = api.clone();
        let org_id = org_id.clone();
        move || {
            let client = api.events.clone();
            let org_id = org_id.clone();
            async move { client.by_org(&org_id).await }
        }
    });

    // Only signed-in members can follow; orgs collaborate instead.
    let viewer_is_user = move || matches!(auth.get().actor, Some(Actor::User(_)));
    let viewer_is_org = move || matches!(auth.get().actor, Some(Actor::Org(_)));

    view! {
        <article class="org">
            <header class="org__header">
                <h1>{org.name.clone()}</h1>
                <Show when={
                    let verified = org.verified;
                    move || verified
                }>
                    <span class="org__verified" title="Verified organization">
                        "\u{2713} Verified"
                    </span>
                </Show>
                <Show when=viewer_is_user>
                    <FollowButton org_id=follow_org_id.clone()/>
                </Show>
                <Show when=viewer_is_org>
                    <CollabRequestButton org_id=collab_org_id.clone()/>
                </Show>
            </header>
            {org.description.clone().map(|text| view! { <p class="org__description">{text}</p> })}
            {org
                .website
                .clone()
                .map(|url| {
                    view! {
                        <a class="org__website" href=url.clone() rel="noopener">
                            {url.clone()}
                        </a>
                    }
                })}

            <section class="org__events">
                <h2>"Events"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events
                            .get()
                            .map(|outcome| match outcome {
                                Ok(list) => {
                                    view! {
                                        <div class="org__event-cards">
                                            {list
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
                                            on_retry=Callback::new(move |()| events.refetch())
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <ReviewsSection org_id=org_id.clone()/>
        </article>
    }
}

/// One-shot "ask to collaborate" action for org viewers.
#[component]
fn CollabRequestButton(org_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let sent = RwSignal::new(false);

    let on_click = move |_| {
        if sent.get() {
            return;
        }
        // Disable immediately so a double click cannot race two requests.
        sent.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let org_id = org_id.clone();
            leptos::task::spawn_local(async move {
                match api.collab.send_request(&org_id, None, None).await {
                    Ok(_) => {
                        toasts.update(|t| {
                            t.push_success("Collaboration request sent.");
                        });
                    }
                    Err(err) => {
                        sent.set(false);
                        toasts.update(|t| {
                            t.push_error(&format!("Could not send the request: {err}"));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &org_id, toasts);
        }
    };

    view! {
        <button class="org__collab" disabled=move || sent.get() on:click=on_click>
            {move || if sent.get() { "Request sent" } else { "Request collaboration" }}
        </button>
    }
}

#[component]
fn ReviewsSection(org_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let rating_input = RwSignal::new(5.0_f64);
    let comment = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reviews = LocalResource::new({
        let api = api.clone();
        let org_id = org_id.clone();
        move || {
            let client = api.reviews.clone();
            let org_id = org_id.clone();
            async move { client.for_org(&org_id, None, None).await }
        }
    });

    let can_review = move || matches!(auth.get().actor, Some(Actor::User(_)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let org_id = org_id.clone();
            leptos::task::spawn_local(async move {
                let text = comment.get();
                let text = text.trim();
                let result = api
                    .reviews
                    .submit(&org_id, rating_input.get(), (!text.is_empty()).then_some(text))
                    .await;
                match result {
                    Ok(_) => {
                        comment.set(String::new());
                        reviews.refetch();
                    }
                    Err(err) => {
                        toasts.update(|t| {
                            t.push_error(&format!("Could not submit the review: {err}"));
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &org_id, toasts);
            busy.set(false);
        }
    };

    view! {
        <section class="org__reviews">
            <h2>"Reviews"</h2>
            <Show when=can_review>
                <form class="org__review-form" on:submit=on_submit.clone()>
                    <select on:change=move |ev| {
                        rating_input.set(event_target_value(&ev).parse().unwrap_or(5.0));
                    }>
                        <option value="5">"5 stars"</option>
                        <option value="4.5">"4.5 stars"</option>
                        <option value="4">"4 stars"</option>
                        <option value="3.5">"3.5 stars"</option>
                        <option value="3">"3 stars"</option>
                        <option value="2.5">"2.5 stars"</option>
                        <option value="2">"2 stars"</option>
                        <option value="1.5">"1.5 stars"</option>
                        <option value="1">"1 star"</option>
                        <option value="0.5">"half a star"</option>
                    </select>
                    <input
                        class="org__review-comment"
                        type="text"
                        placeholder="Share your experience (optional)"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Post review"
                    </button>
                </form>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading reviews..."</p> }>
                {move || {
                    reviews
                        .get()
                        .map(|outcome| match outcome {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No reviews yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="org__review-list">
                                        {list
                                            .into_iter()
                                            .map(|review| {
                                                view! {
                                                    <li class="org__review">
                                                        <StarRating value=review.rating/>
                                                        <span class="org__review-author">{review.user_name}</span>
                                                        {review.comment.map(|text| view! { <p>{text}</p> })}
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
                                        on_retry=Callback::new(move |()| reviews.refetch())
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
