//! Login, session verification, and logout.
//!
//! ERROR HANDLING
//! ==============
//! `verify` treats "no token" and "invalid token" as the expected anonymous
//! state and resolves to `None` instead of failing; an anonymous visitor is
//! not an error. `login` failures surface as `ApiError::Auth` and are never
//! retried here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::error::{ApiError, ApiResult};
use crate::net::http::Http;
use crate::net::types::Actor;

const LOGIN_ENDPOINT: &str = "/api/login";
const VERIFY_ENDPOINT: &str = "/api/verify";

/// Login form contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: Actor,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    user: Option<Actor>,
}

/// Validate the login form before dispatch.
///
/// # Errors
///
/// Returns an inline-displayable message when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Session state machine for one browser profile:
/// ANONYMOUS -> (login ok) -> AUTHENTICATED -> (logout | verify fails) -> ANONYMOUS.
#[derive(Clone)]
pub struct AuthClient {
    http: Http,
}

impl AuthClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Submit credentials. On success the returned token becomes the live
    /// session and the normalized actor is handed back.
    ///
    /// # Errors
    ///
    /// `ApiError::Auth` when the backend rejects the credentials; transport
    /// and server failures pass through unchanged.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Actor> {
        let response: LoginResponse = self
            .http
            .post(LOGIN_ENDPOINT, credentials)
            .await
            .map_err(|err| match err {
                ApiError::Unauthorized => ApiError::Auth("invalid email or password".to_owned()),
                ApiError::Server { status: 400, message } => ApiError::Auth(message),
                other => other,
            })?;
        self.http.session().set_token(&response.token);
        Ok(response.user)
    }

    /// Resolve the stored token to an actor.
    ///
    /// No token means no network call at all. An invalid or expired token
    /// also resolves to `None`; the caller decides whether that means a
    /// redirect.
    pub async fn verify(&self) -> Option<Actor> {
        self.http.session().token()?;
        match self.http.get_auth::<VerifyResponse>(VERIFY_ENDPOINT).await {
            Ok(response) => response.user,
            Err(ApiError::Unauthorized) => None,
            Err(err) => {
                log::warn!("session verify failed: {err}");
                None
            }
        }
    }

    /// Drop the local session. There is no server-side session to revoke, so
    /// no network call is made.
    pub fn logout(&self) {
        self.http.session().clear();
    }
}
