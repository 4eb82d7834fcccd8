//! Login page with an email + password credential form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
use crate::net::api::auth::validate_credentials;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;

/// Message shown for a given login failure.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Auth(message) if !message.is_empty() => message.clone(),
        ApiError::Auth(_) => "Invalid email or password.".to_owned(),
        ApiError::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.auth.login(&credentials).await {
                    Ok(actor) => {
                        let home = actor.home_path();
                        auth.set(AuthState::resolved(Some(actor)));
                        navigate(home, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(login_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &api, &navigate, auth);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sahyog"</h1>
                <p class="login-card__subtitle">"Community events, volunteering, and giving"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
