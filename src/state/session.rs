//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and identity-aware components; written only by
//! `login`, `logout` and `verify`.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping identity-changing calls are not queued. Each call writes the
//! cell when its request settles, so the last one to settle wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::{SessionApi, SessionError};
use crate::net::types::{Credentials, Identity};

/// Message used when the server rejects a login without an `error` field.
pub const DEFAULT_LOGIN_ERROR: &str = "Login failed";

/// Current identity plus whether the startup check has settled.
///
/// `is_authenticated` and `is_admin` are derived from `identity` on every
/// call and are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub checked: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(Identity::is_admin)
    }
}

/// A rejected login, carrying the message to show the visitor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthenticationError {
    pub message: String,
}

impl From<SessionError> for AuthenticationError {
    fn from(err: SessionError) -> Self {
        let message = match err {
            SessionError::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message,
            SessionError::Rejected { .. } => DEFAULT_LOGIN_ERROR.to_owned(),
            other => other.to_string(),
        };
        Self { message }
    }
}

/// Owns the session cell and the API used to change it.
pub struct SessionStore<A> {
    api: Arc<A>,
    state: RwSignal<SessionState>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), state: self.state }
    }
}

impl<A: SessionApi> SessionStore<A> {
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api), state: RwSignal::new(SessionState::default()) }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read-only handle for reactive consumers.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Untracked copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    pub fn is_checked(&self) -> bool {
        self.state.with(|s| s.checked)
    }

    /// Sign in and replace the current identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError` when the server rejects the credentials
    /// or the request cannot complete. The session is left untouched.
    pub async fn login(&self, credentials: Credentials) -> Result<Identity, AuthenticationError> {
        match self.api.login(&credentials).await {
            Ok(identity) => {
                log::info!("signed in as {}", identity.email);
                self.state.update(|s| s.identity = Some(identity.clone()));
                Ok(identity)
            }
            Err(err) => {
                log::warn!("login for {} failed: {err}", credentials.email);
                Err(err.into())
            }
        }
    }

    /// End the session. The identity is cleared whatever the server says.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            log::debug!("logout request failed: {err}");
        }
        self.state.update(|s| s.identity = None);
    }

    /// Refresh the identity from the server; any failure means anonymous.
    pub async fn verify(&self) {
        let identity = match self.api.current_identity().await {
            Ok(identity) => Some(identity),
            Err(err) => {
                log::debug!("session verification failed: {err}");
                None
            }
        };
        self.state.update(|s| {
            s.identity = identity;
            s.checked = true;
        });
    }
}
