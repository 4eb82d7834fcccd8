//! Auth-session state for the current browser actor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware components to coordinate login
//! redirects and role-dependent rendering. The actor here is a cached copy
//! of the last `verify()` result, never an independent source of truth.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Actor;

/// Authentication state tracking the resolved actor and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub actor: Option<Actor>,
    pub loading: bool,
}

impl AuthState {
    /// State while a `verify()` round trip is in flight.
    pub fn resolving() -> Self {
        Self { actor: None, loading: true }
    }

    /// State after `verify()` settled.
    pub fn resolved(actor: Option<Actor>) -> Self {
        Self { actor, loading: false }
    }

    /// Back to anonymous, e.g. after logout.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.actor.is_some()
    }
}
