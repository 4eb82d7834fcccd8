//! Read-only star rating display.

use leptos::prelude::*;

use crate::util::rating;

#[component]
pub fn StarRating(value: f64) -> impl IntoView {
    let normalized = rating::normalize(value);
    let full = rating::full_stars(normalized);
    let half = rating::has_half_star(normalized);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let empty = rating::MAX_STARS as u8 - full - u8::from(half);

    let label = format!("{normalized} out of {} stars", rating::MAX_STARS);

    view! {
        <span class="star-rating" title=label>
            <span class="star-rating__full">{"\u{2605}".repeat(usize::from(full))}</span>
            <Show when=move || half>
                <span class="star-rating__half">"\u{2bea}"</span>
            </Show>
            <span class="star-rating__empty">{"\u{2606}".repeat(usize::from(empty))}</span>
        </span>
    }
}
