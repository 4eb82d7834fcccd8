//! Role-gated route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role-restricted screen wraps its content in [`RequireRole`], which
//! resolves the current actor through the auth client before anything
//! renders. Resolution is asynchronous, so the guard renders nothing at all
//! until it settles, neither the protected children nor a redirect, to
//! avoid flashing unauthorized content.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::api::Api;
use crate::net::types::{Actor, DASHBOARD_PATH, LOGIN_PATH, Role};
use crate::state::auth::AuthState;

/// What the guard decided for one resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Actor is allowed; render the protected children.
    Render,
    /// Send the visitor elsewhere.
    Redirect(&'static str),
}

/// Pure guard decision, in rule order:
///
/// 1. no actor (no token, or the token failed verification) -> login;
/// 2. the dashboard flag forces org actors to the dashboard before the
///    allow-list is consulted;
/// 3. a role outside a non-empty allow-list -> that role's home screen;
/// 4. otherwise render.
///
/// An empty allow-list admits any authenticated role.
pub fn guard_outcome(actor: Option<&Actor>, allow: &[Role], redirect_to_dashboard: bool) -> GuardOutcome {
    let Some(actor) = actor else {
        return GuardOutcome::Redirect(LOGIN_PATH);
    };
    if redirect_to_dashboard && actor.role() == Role::Org {
        return GuardOutcome::Redirect(DASHBOARD_PATH);
    }
    if !allow.is_empty() && !allow.contains(&actor.role()) {
        return GuardOutcome::Redirect(actor.role().home_path());
    }
    GuardOutcome::Render
}

/// Guard component wrapping a role-restricted screen.
///
/// `allow` is the role allow-list (empty = any authenticated role);
/// `redirect_to_dashboard` forces org actors to the dashboard even where the
/// allow-list alone would send them to `/org/home`.
#[component]
pub fn RequireRole(
    #[prop(optional)] allow: &'static [Role],
    #[prop(optional)] redirect_to_dashboard: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();

    // Fresh verification per guarded navigation; the token is resolved
    // against the backend, not trusted from a previous screen.
    let resolved = LocalResource::new(move || {
        let auth_client = api.auth.clone();
        async move { auth_client.verify().await }
    });

    // Keep the shared auth state in sync with the latest resolution so
    // headers and identity-aware components agree with the guard.
    Effect::new(move || {
        if let Some(actor) = resolved.get() {
            auth.set(AuthState::resolved(actor.clone()));
        }
    });

    move || match resolved.get() {
        // Still resolving: render nothing, not even a redirect.
        None => ().into_any(),
        Some(actor) => match guard_outcome(actor.as_ref(), allow, redirect_to_dashboard) {
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        },
    }
}
