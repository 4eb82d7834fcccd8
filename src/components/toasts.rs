//! Toast host rendering the shared toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class>
                                <span class="toast__text">{toast.text}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| {
                                        let id = id.clone();
                                        toasts.update(|t| t.dismiss(&id));
                                    }
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
