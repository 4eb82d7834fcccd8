//! Inline error panel with a manual retry action.
//!
//! Page-load failures render through this; transient action failures use
//! toasts instead.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <p class="error-panel__message">{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}
