//! Clickable card for event list entries.

use leptos::prelude::*;

use crate::net::types::Event;

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = format!("/event/{}", event.id);
    let meta = [event.city.clone(), event.category.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" \u{b7} ");

    view! {
        <a class="event-card" href=href>
            <span class="event-card__title">{event.title}</span>
            <span class="event-card__date">{event.date}</span>
            <Show when={
                let meta = meta.clone();
                move || !meta.is_empty()
            }>
                <span class="event-card__meta">{meta.clone()}</span>
            </Show>
            {event
                .org_name
                .map(|org| view! { <span class="event-card__org">{org}</span> })}
        </a>
    }
}
