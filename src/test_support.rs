//! Scripted `SessionApi` for unit tests.
//!
//! Replies are queued per call kind. A queued reply is either ready at once
//! or gated behind a oneshot sender so a test decides when it settles.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::oneshot;

use crate::net::api::{SessionApi, SessionError};
use crate::net::types::{Credentials, Identity, Role};

type Reply<T> = oneshot::Receiver<Result<T, SessionError>>;
pub(crate) type Gate<T> = oneshot::Sender<Result<T, SessionError>>;

#[derive(Default)]
pub(crate) struct MockSessionApi {
    logins: Mutex<VecDeque<Reply<Identity>>>,
    logouts: Mutex<VecDeque<Reply<()>>>,
    identities: Mutex<VecDeque<Reply<Identity>>>,
    calls: Mutex<Vec<&'static str>>,
}

fn ready<T>(queue: &Mutex<VecDeque<Reply<T>>>, reply: Result<T, SessionError>) {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(reply);
    queue.lock().unwrap().push_back(rx);
}

fn gated<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Gate<T> {
    let (tx, rx) = oneshot::channel();
    queue.lock().unwrap().push_back(rx);
    tx
}

async fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Result<T, SessionError> {
    let reply = queue.lock().unwrap().pop_front();
    match reply {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(SessionError::Transport("reply dropped".to_owned()))),
        None => Err(SessionError::Transport("connection refused".to_owned())),
    }
}

impl MockSessionApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn queue_login(&self, reply: Result<Identity, SessionError>) {
        ready(&self.logins, reply);
    }

    pub(crate) fn gate_login(&self) -> Gate<Identity> {
        gated(&self.logins)
    }

    pub(crate) fn queue_logout(&self, reply: Result<(), SessionError>) {
        ready(&self.logouts, reply);
    }

    pub(crate) fn queue_identity(&self, reply: Result<Identity, SessionError>) {
        ready(&self.identities, reply);
    }

    pub(crate) fn gate_identity(&self) -> Gate<Identity> {
        gated(&self.identities)
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SessionApi for MockSessionApi {
    async fn login(&self, _credentials: &Credentials) -> Result<Identity, SessionError> {
        self.record("login");
        next(&self.logins).await
    }

    async fn logout(&self) -> Result<(), SessionError> {
        self.record("logout");
        next(&self.logouts).await
    }

    async fn current_identity(&self) -> Result<Identity, SessionError> {
        self.record("me");
        next(&self.identities).await
    }
}

pub(crate) fn user(email: &str) -> Identity {
    Identity { id: 1, username: "visitor".to_owned(), email: email.to_owned(), role: Role::User }
}

pub(crate) fn admin(email: &str) -> Identity {
    Identity { id: 2, username: "konsta".to_owned(), email: email.to_owned(), role: Role::Admin }
}

pub(crate) fn unauthorized() -> SessionError {
    SessionError::Rejected { status: 401, message: Some("Not authenticated".to_owned()) }
}
