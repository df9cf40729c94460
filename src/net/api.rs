//! REST helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `SessionError::Unavailable` since a
//! session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `SessionError` instead of panicking. The session
//! store decides which failures surface and which degrade to anonymous.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{Credentials, Identity};
#[cfg(feature = "hydrate")]
use super::types::ErrorBody;

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";
pub const ME_ENDPOINT: &str = "/api/me";

/// Failure of a single session API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("session request failed: {0}")]
    Transport(String),
    #[error("unexpected session response: {0}")]
    Decode(String),
    #[error("session api is not available during server rendering")]
    Unavailable,
}

/// The three calls the session store depends on.
pub trait SessionApi {
    /// `POST /api/login` with the credentials as JSON.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Identity, SessionError>>;

    /// `POST /api/logout`. Callers may ignore the result.
    fn logout(&self) -> impl Future<Output = Result<(), SessionError>>;

    /// `GET /api/me`; anything but a 200 with an identity body is an error.
    fn current_identity(&self) -> impl Future<Output = Result<Identity, SessionError>>;
}

/// `SessionApi` over same-origin (or `base`-prefixed) HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpSessionApi {
    base: String,
}

impl HttpSessionApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: &gloo_net::http::Response) -> SessionError {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.unwrap_or_default();
    SessionError::Rejected { status, message: body.error }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> SessionError {
    SessionError::Transport(err.to_string())
}

impl SessionApi for HttpSessionApi {
    async fn login(&self, credentials: &Credentials) -> Result<Identity, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_ENDPOINT))
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(&resp).await);
            }
            resp.json::<Identity>()
                .await
                .map_err(|e| SessionError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(SessionError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            gloo_net::http::Request::post(&self.endpoint(LOGOUT_ENDPOINT))
                .send()
                .await
                .map_err(transport)?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::Unavailable)
        }
    }

    async fn current_identity(&self) -> Result<Identity, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(ME_ENDPOINT))
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(&resp).await);
            }
            resp.json::<Identity>()
                .await
                .map_err(|e| SessionError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::Unavailable)
        }
    }
}
