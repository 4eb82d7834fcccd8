//! Error taxonomy for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! Resource clients never swallow or retry errors; every failure surfaces
//! once to the calling view, which picks between an inline panel, a toast,
//! or a redirect. The only non-error "failure" in the system is an absent or
//! expired session, which `AuthClient::verify` reports as `None`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong between a typed client call and its payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required local argument was missing or empty. Raised before any
    /// network I/O happens.
    #[error("invalid request: {0}")]
    Validation(String),
    /// The backend rejected a login attempt.
    #[error("login failed: {0}")]
    Auth(String),
    /// 401/403 from an authenticated call, or no token present at dispatch
    /// time. Interpreting this as "log out" is the caller's decision.
    #[error("session is not authorized")]
    Unauthorized,
    /// 404 from the backend.
    #[error("not found")]
    NotFound,
    /// Any other non-success status, or a malformed success payload.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Transport-level failure before a status code existed.
    #[error("network error: {0}")]
    Network(String),
}

/// Error body shape used by the backend. Some routes say `message`, older
/// ones say `error`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> String {
        self.message
            .into_iter()
            .chain(self.error)
            .find(|m| !m.is_empty())
            .unwrap_or_default()
    }
}

/// Map a non-success HTTP status to the error taxonomy.
pub fn error_from_status(status: u16, message: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        _ => ApiError::Server {
            status,
            message: message.to_owned(),
        },
    }
}

/// Validate a required identifier before it reaches a URL.
///
/// # Errors
///
/// Returns `ApiError::Validation` when the value is empty or whitespace.
pub fn require_id(name: &str, value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{name} is required")));
    }
    Ok(trimmed.to_owned())
}
