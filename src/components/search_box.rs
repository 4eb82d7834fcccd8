//! Debounced search input with typeahead suggestions.
//!
//! TRADE-OFFS
//! ==========
//! Each keystroke takes a fresh ticket and waits out a fixed quiescence
//! window before dispatching; only the holder of the latest ticket is
//! allowed to fetch or apply results. In-flight suggestion requests made
//! stale by further typing are discarded at the apply site rather than
//! cancelled; suggestions are advisory, so the race is acceptable.

#[cfg(test)]
#[path = "search_box_test.rs"]
mod search_box_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::types::Suggestion;
use crate::util::seq::RequestSeq;

/// Quiescence window between the last keystroke and the suggest request.
const SUGGEST_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn SearchBox(
    /// Invoked with the query when the visitor submits a full search.
    on_submit: Callback<String>,
    /// Invoked when a suggestion is picked, with its route.
    on_pick: Callback<String>,
) -> impl IntoView {
    let api = expect_context::<Api>();

    let query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<Suggestion>::new());
    let seq = StoredValue::new(RequestSeq::new());

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        let ticket = seq.with_value(RequestSeq::begin);

        if value.trim().is_empty() {
            suggestions.set(Vec::new());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SUGGEST_DEBOUNCE_MS).await;
                // Superseded while waiting out the quiescence window.
                if !seq.with_value(|s| s.is_current(ticket)) {
                    return;
                }
                match api.search.suggest(&value).await {
                    Ok(items) => {
                        if seq.with_value(|s| s.is_current(ticket)) {
                            suggestions.set(items);
                        }
                    }
                    Err(err) => log::debug!("suggest failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, &api);
        }
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = query.get();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        suggestions.set(Vec::new());
        on_submit.run(trimmed.to_owned());
    };

    view! {
        <form class="search-box" on:submit=submit>
            <input
                class="search-box__input"
                type="search"
                placeholder="Search events and organizations..."
                prop:value=move || query.get()
                on:input=on_input
            />
            <Show when=move || !suggestions.get().is_empty()>
                <ul class="search-box__suggestions">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|s| {
                                let route = suggestion_route(&s);
                                let label = s.label.clone();
                                view! {
                                    <li class="search-box__suggestion">
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                suggestions.set(Vec::new());
                                                on_pick.run(route.clone());
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </form>
    }
}

/// Route a picked suggestion navigates to.
fn suggestion_route(suggestion: &Suggestion) -> String {
    match suggestion.kind {
        crate::net::types::SuggestionKind::Event => format!("/event/{}", suggestion.id),
        crate::net::types::SuggestionKind::Org => format!("/org/{}", suggestion.id),
    }
}
