//! Public landing page: event feed plus search.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_panel::ErrorPanel;
use crate::components::event_card::EventCard;
use crate::components::search_box::SearchBox;
use crate::net::api::Api;
use crate::net::api::events::EventFilter;
use crate::net::types::SearchResults;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    // Active full-search query; empty means "show the plain feed".
    let active_query = RwSignal::new(String::new());

    let feed = LocalResource::new({
        let api = api.clone();
        move || {
            let events = api.events.clone();
            async move { events.list(EventFilter::default()).await }
        }
    });

    let results = LocalResource::new({
        let api = api.clone();
        move || {
            let search = api.search.clone();
            let q = active_query.get();
            async move {
                if q.is_empty() {
                    Ok(SearchResults::default())
                } else {
                    search.search(&q, None, None, None).await
                }
            }
        }
    });

    let on_submit = Callback::new(move |q: String| active_query.set(q));
    let on_pick = Callback::new(move |route: String| navigate(&route, NavigateOptions::default()));

    view! {
        <div class="home-page">
            <SearchBox on_submit=on_submit on_pick=on_pick/>

            <Show
                when=move || active_query.get().is_empty()
                fallback=move || {
                    view! {
                        <section class="home-page__results">
                            <h2>{move || format!("Results for \"{}\"", active_query.get())}</h2>
                            <button class="btn" on:click=move |_| active_query.set(String::new())>
                                "Back to all events"
                            </button>
                            <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                                {move || {
                                    results
                                        .get()
                                        .map(|outcome| match outcome {
                                            Ok(found) => {
                                                view! {
                                                    <div class="home-page__cards">
                                                        {found
                                                            .events
                                                            .into_iter()
                                                            .map(|event| view! { <EventCard event=event/> })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                    <ul class="home-page__orgs">
                                                        {found
                                                            .orgs
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
                                                        on_retry=Callback::new(move |()| results.refetch())
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
            >
                <section class="home-page__feed">
                    <h2>"Upcoming events"</h2>
                    <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                        {move || {
                            feed.get()
                                .map(|outcome| match outcome {
                                    Ok(events) => {
                                        if events.is_empty() {
                                            view! { <p class="home-page__empty">"No upcoming events."</p> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="home-page__cards">
                                                    {events
                                                        .into_iter()
                                                        .map(|event| view! { <EventCard event=event/> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }
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
            </Show>
        </div>
    }
}
