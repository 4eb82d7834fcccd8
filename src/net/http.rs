//! Public and authenticated fetch wrappers over `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls. Server-side (SSR): stubs that
//! fail with a network error, since these endpoints are only meaningful in
//! the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every resource client funnels through this module. Authenticated variants
//! read the session token immediately before dispatch (never cached across
//! calls) and attach it as a bearer credential. A 401/403 maps to
//! `ApiError::Unauthorized` without clearing the token or redirecting; the
//! decision to log out belongs to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::{ApiError, ApiResult};
use crate::session::Session;

#[cfg(feature = "hydrate")]
use crate::net::error::{ErrorBody, error_from_status};

/// Bearer credential header value for a session token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query-string pairs with falsy-value omission.
///
/// Optional filters that are absent or empty are left out of the request
/// entirely rather than sent as empty strings.
#[derive(Clone, Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unconditionally.
    #[must_use]
    pub fn push(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Append a pair unless the value is absent or empty.
    #[must_use]
    pub fn push_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.push(key, v.trim()),
            _ => self,
        }
    }

    /// Append a numeric pair (pagination) unless absent.
    #[must_use]
    pub fn push_num(self, key: &str, value: Option<u32>) -> Self {
        match value {
            Some(n) => self.push(key, &n.to_string()),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Multipart payload for upload endpoints.
///
/// Non-file fields are stringified; booleans are serialized as the literal
/// strings `"true"`/`"false"`, the wire format the backend expects rather than a
/// serializer default.
#[derive(Default)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    #[cfg(feature = "hydrate")]
    files: Vec<(String, web_sys::File)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Add a text field unless the value is absent or empty.
    #[must_use]
    pub fn text_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.text(name, v.trim()),
            _ => self,
        }
    }

    /// Add a boolean field as `"true"`/`"false"`.
    #[must_use]
    pub fn flag(self, name: &str, value: bool) -> Self {
        self.text(name, if value { "true" } else { "false" })
    }

    /// Attach a file part.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.files.push((name.to_owned(), file));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[cfg(feature = "hydrate")]
    fn into_form_data(self) -> ApiResult<web_sys::FormData> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("failed to construct form data".to_owned()))?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::Network(format!("failed to append field {name}")))?;
        }
        for (name, file) in &self.files {
            form.append_with_blob(name, file)
                .map_err(|_| ApiError::Network(format!("failed to append file {name}")))?;
        }
        Ok(form)
    }
}

/// HTTP verbs used by the REST boundary.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[cfg(feature = "hydrate")]
fn builder(method: Method, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Put => Request::put(path),
        Method::Patch => Request::patch(path),
        Method::Delete => Request::delete(path),
    }
}

/// Shared HTTP entry point holding the injected session.
#[derive(Clone)]
pub struct Http {
    session: Session,
}

impl Http {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read the token at dispatch time. A missing token fails locally with
    /// `Unauthorized` before any network I/O.
    pub(crate) fn require_token(&self) -> ApiResult<String> {
        self.session.token().ok_or(ApiError::Unauthorized)
    }

    // ----- public (unauthenticated) calls -----

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_query(path, Query::new()).await
    }

    pub async fn get_query<T: DeserializeOwned>(&self, path: &str, query: Query) -> ApiResult<T> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = builder(Method::Get, path);
            if !query.is_empty() {
                req = req.query(query.pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            send_bodyless(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(server_render_stub())
        }
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        #[cfg(feature = "hydrate")]
        {
            send_json(builder(Method::Post, path), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(server_render_stub())
        }
    }

    // ----- authenticated calls -----

    pub async fn get_auth<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_auth_query(path, Query::new()).await
    }

    pub async fn get_auth_query<T: DeserializeOwned>(&self, path: &str, query: Query) -> ApiResult<T> {
        let token = self.require_token()?;
        #[cfg(feature = "hydrate")]
        {
            let mut req = builder(Method::Get, path).header("Authorization", &bearer(&token));
            if !query.is_empty() {
                req = req.query(query.pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            send_bodyless(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query, token);
            Err(server_render_stub())
        }
    }

    pub async fn post_auth<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let token = self.require_token()?;
        #[cfg(feature = "hydrate")]
        {
            send_json(builder(Method::Post, path).header("Authorization", &bearer(&token)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, token);
            Err(server_render_stub())
        }
    }

    /// POST with no body, for toggle-style endpoints (attend, follow, approve).
    pub async fn post_auth_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let token = self.require_token()?;
        #[cfg(feature = "hydrate")]
        {
            send_bodyless(builder(Method::Post, path).header("Authorization", &bearer(&token))).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, token);
            Err(server_render_stub())
        }
    }

    pub async fn patch_auth<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let token = self.require_token()?;
        #[cfg(feature = "hydrate")]
        {
            send_json(builder(Method::Patch, path).header("Authorization", &bearer(&token)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, token);
            Err(server_render_stub())
        }
    }

    pub async fn delete_auth<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let token = self.require_token()?;
        #[cfg(feature = "hydrate")]
        {
            send_bodyless(builder(Method::Delete, path).header("Authorization", &bearer(&token))).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, token);
            Err(server_render_stub())
        }
    }

    pub async fn post_multipart_auth<T: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> ApiResult<T> {
        self.send_multipart(Verb::Post, path, form).await
    }

    pub async fn put_multipart_auth<T: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> ApiResult<T> {
        self.send_multipart(Verb::Put, path, form).await
    }

    async fn send_multipart<T: DeserializeOwned>(&self, verb: Verb, path: &str, form: MultipartForm) -> ApiResult<T> {
        let token = self.require_token()?;
        #[cfg(feature = "hydrate")]
        {
            let method = match verb {
                Verb::Post => Method::Post,
                Verb::Put => Method::Put,
            };
            // No explicit Content-Type: the browser supplies the multipart
            // boundary itself.
            let req = builder(method, path)
                .header("Authorization", &bearer(&token))
                .body(form.into_form_data()?)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            parse(req.send().await.map_err(|e| ApiError::Network(e.to_string()))?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, form, token);
            Err(server_render_stub())
        }
    }
}

/// Multipart verb selector, kept separate from the hydrate-only `Method`.
#[derive(Clone, Copy, Debug)]
enum Verb {
    Post,
    Put,
}

#[cfg(not(feature = "hydrate"))]
fn server_render_stub() -> ApiError {
    ApiError::Network("not available during server rendering".to_owned())
}

#[cfg(feature = "hydrate")]
async fn send_bodyless<T: DeserializeOwned>(req: gloo_net::http::RequestBuilder) -> ApiResult<T> {
    let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize, T: DeserializeOwned>(
    req: gloo_net::http::RequestBuilder,
    body: &B,
) -> ApiResult<T> {
    let req = req.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse(resp).await
}

#[cfg(feature = "hydrate")]
async fn parse<T: DeserializeOwned>(resp: gloo_net::http::Response) -> ApiResult<T> {
    let status = resp.status();
    if resp.ok() {
        resp.json::<T>().await.map_err(|e| ApiError::Server {
            status,
            message: format!("malformed payload: {e}"),
        })
    } else {
        let message = resp
            .json::<ErrorBody>()
            .await
            .map(ErrorBody::into_message)
            .unwrap_or_default();
        Err(error_from_status(status, &message))
    }
}
