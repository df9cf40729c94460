//! Ordered navigation pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bootstrap registers the guard as a pre-navigation hook and the title
//! update as a post-navigation hook. A navigation commits only after every
//! pre hook proceeded; post hooks run only after commit.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use super::guard::Decision;
use super::table::{RouteMatch, RouteTable, normalize_path};

pub type BeforeHook = Box<dyn Fn(&RouteMatch) -> Decision + Send + Sync>;
pub type AfterHook = Box<dyn Fn(&RouteMatch) + Send + Sync>;

/// Redirect hops followed before a navigation is abandoned.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The requested path committed as is.
    Committed(RouteMatch),
    /// A pre hook redirected; `to` is the route that committed instead.
    Redirected { from: String, to: RouteMatch },
    /// No route matched; nothing committed.
    Unmatched(String),
    /// Redirects kept bouncing; nothing committed.
    RedirectLoop(String),
}

pub struct Navigator {
    table: RouteTable,
    before: Vec<BeforeHook>,
    after: Vec<AfterHook>,
    current: RwSignal<Option<RouteMatch>>,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self { table, before: Vec::new(), after: Vec::new(), current: RwSignal::new(None) }
    }

    pub fn before_each(&mut self, hook: impl Fn(&RouteMatch) -> Decision + Send + Sync + 'static) {
        self.before.push(Box::new(hook));
    }

    pub fn after_each(&mut self, hook: impl Fn(&RouteMatch) + Send + Sync + 'static) {
        self.after.push(Box::new(hook));
    }

    /// Last committed route.
    pub fn current(&self) -> ReadSignal<Option<RouteMatch>> {
        self.current.read_only()
    }

    pub fn navigate(&self, path: &str) -> NavigationOutcome {
        let requested = normalize_path(path);
        let mut target = requested.clone();
        for _ in 0..=MAX_REDIRECTS {
            let Some(matched) = self.table.resolve(&target) else {
                log::debug!("no route for {target}");
                return NavigationOutcome::Unmatched(target);
            };
            match self.run_before(&matched) {
                Decision::Proceed => {
                    self.commit(&matched);
                    return if matched.path == requested {
                        NavigationOutcome::Committed(matched)
                    } else {
                        NavigationOutcome::Redirected { from: requested, to: matched }
                    };
                }
                Decision::Redirect(next) => {
                    log::debug!("navigation to {target} redirected to {next}");
                    target = normalize_path(&next);
                }
            }
        }
        log::warn!("too many redirects starting at {requested}");
        NavigationOutcome::RedirectLoop(requested)
    }

    fn run_before(&self, matched: &RouteMatch) -> Decision {
        self.before
            .iter()
            .map(|hook| hook(matched))
            .find(|decision| *decision != Decision::Proceed)
            .unwrap_or(Decision::Proceed)
    }

    fn commit(&self, matched: &RouteMatch) {
        self.current.set(Some(matched.clone()));
        for hook in &self.after {
            hook(matched);
        }
    }
}
