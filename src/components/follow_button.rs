//! Optimistic follow/unfollow toggle for org profiles.
//!
//! TRADE-OFFS
//! ==========
//! Toggle responses carry no ordering guarantee, so the handler applies the
//! flip optimistically, tickets every dispatch through a `RequestSeq`, and
//! ignores completions that are no longer the latest intent. A failed latest
//! request reverts the optimistic flip and reports through a toast.

use leptos::prelude::*;

use crate::net::api::Api;
use crate::state::toast::ToastState;
use crate::util::seq::RequestSeq;

#[component]
pub fn FollowButton(org_id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // None until the initial lookup lands; the control is disabled until then.
    let following = RwSignal::new(None::<bool>);
    let seq = StoredValue::new(RequestSeq::new());

    let initial = LocalResource::new({
        let api = api.clone();
        let org_id = org_id.clone();
        move || {
            let follows = api.follows.clone();
            let org_id = org_id.clone();
            async move { follows.do_i_follow(&org_id).await.ok() }
        }
    });

    Effect::new(move || {
        if following.read().is_none()
            && let Some(Some(loaded)) = initial.get()
        {
            following.set(Some(loaded));
        }
    });

    let on_toggle = move |_| {
        let Some(current) = following.get() else {
            return;
        };
        let next = !current;
        following.set(Some(next));
        let ticket = seq.with_value(RequestSeq::begin);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let org_id = org_id.clone();
            leptos::task::spawn_local(async move {
                let result = if next {
                    api.follows.follow(&org_id).await
                } else {
                    api.follows.unfollow(&org_id).await
                };
                // A newer click superseded this request; its completion wins.
                if !seq.with_value(|s| s.is_current(ticket)) {
                    return;
                }
                if let Err(err) = result {
                    following.set(Some(current));
                    toasts.update(|t| {
                        t.push_error(&format!("Could not update follow: {err}"));
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
        <button
            class="follow-button"
            class=("follow-button--active", move || following.get() == Some(true))
            disabled=move || following.get().is_none()
            on:click=on_toggle
        >
            {move || match following.get() {
                None => "...",
                Some(true) => "Following",
                Some(false) => "Follow",
            }}
        </button>
    }
}
