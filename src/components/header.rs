//! Top navigation bar with role-aware links and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notification_bell::NotificationBell;
use crate::net::api::Api;
use crate::net::types::{Actor, LOGIN_PATH};
use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        api.auth.logout();
        auth.set(AuthState::anonymous());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                "Sahyog"
            </a>
            <nav class="header__nav">
                {move || {
                    auth.get()
                        .actor
                        .map(|actor| {
                            let home = actor.home_path();
                            view! {
                                <a href=home>"My Home"</a>
                                <Show when={
                                    let is_org = matches!(actor, Actor::Org(_));
                                    move || is_org
                                }>
                                    <a href="/dashboard">"Dashboard"</a>
                                </Show>
                                <a href="/chat">"Chat"</a>
                                <NotificationBell/>
                            }
                        })
                }}
            </nav>
            <div class="header__session">
                {move || {
                    let state = auth.get();
                    if state.loading {
                        ().into_any()
                    } else if let Some(actor) = state.actor {
                        view! {
                            <span class="header__actor">{actor.display_name().to_owned()}</span>
                            <button class="header__logout" on:click=on_logout.clone()>
                                "Log out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class="header__login" href=LOGIN_PATH>
                                "Log in"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
