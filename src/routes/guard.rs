//! Pre-navigation authorization check.
//!
//! The admin gate is evaluated before the authentication gate and the first
//! failing gate short-circuits. The check reads the session as it is; keeping
//! it fresh is the bootstrap's job.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::RouteMeta;
use crate::state::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(String),
}

#[must_use]
pub fn evaluate(meta: &RouteMeta, session: &SessionState, login_path: &str) -> Decision {
    if meta.requires_admin && !session.is_admin() {
        return Decision::Redirect(login_path.to_owned());
    }
    if meta.requires_auth && !session.is_authenticated() {
        return Decision::Redirect(login_path.to_owned());
    }
    Decision::Proceed
}
