//! One-time application wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Site` is created once by the root component and provided as context. It
//! owns the session store, the locale resolver and the navigation pipeline,
//! with the guard registered before navigation and the title update after.
//!
//! ORDERING
//! ========
//! `sync` is the only way the host drives navigation. It defers (returns
//! `None`) until startup has settled. In the browser that is after `start`
//! verified the session, so the first guard evaluation sees a verified
//! session. `prerender` settles at once without a network call and the
//! session stays anonymous.
//!
//! `sync` reads the readiness flag through a tracked signal, so a reactive
//! caller re-runs when startup settles.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::i18n::I18n;
use crate::net::api::SessionApi;
use crate::routes::guard;
use crate::routes::navigation::{NavigationOutcome, Navigator};
use crate::routes::table::RouteTable;
use crate::routes::title::resolve_title;
use crate::state::session::SessionStore;
use crate::util::storage::Preferences;
use crate::util::theme::{self, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Pre-render pass; no browser, no session.
    Server,
    /// Hydrated in the browser.
    Client,
}

impl RenderMode {
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(feature = "hydrate") { Self::Client } else { Self::Server }
    }
}

pub struct Site<A> {
    pub config: Arc<SiteConfig>,
    pub session: SessionStore<A>,
    pub i18n: I18n,
    pub prefs: Arc<dyn Preferences>,
    navigator: Arc<Navigator>,
    title: RwSignal<String>,
    theme: RwSignal<Theme>,
    started: Arc<AtomicBool>,
    ready: RwSignal<bool>,
}

impl<A> Clone for Site<A> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            session: self.session.clone(),
            i18n: self.i18n,
            prefs: Arc::clone(&self.prefs),
            navigator: Arc::clone(&self.navigator),
            title: self.title,
            theme: self.theme,
            started: Arc::clone(&self.started),
            ready: self.ready,
        }
    }
}

impl<A: SessionApi + Send + Sync + 'static> Site<A> {
    pub fn new(
        config: SiteConfig,
        api: A,
        prefs: Arc<dyn Preferences>,
        environment_language: Option<&str>,
    ) -> Self {
        let config = Arc::new(config);
        let session = SessionStore::new(api);
        let i18n = I18n::new(Arc::clone(&prefs), environment_language);
        let title = RwSignal::new(config.default_title.clone());
        let initial_theme = theme::read_preference(prefs.as_ref());
        theme::apply(initial_theme);

        let mut navigator = Navigator::new(RouteTable::site());
        {
            let session = session.clone();
            let config = Arc::clone(&config);
            navigator.before_each(move |target| guard::evaluate(&target.meta, &session.snapshot(), &config.login_path));
        }
        {
            let config = Arc::clone(&config);
            navigator.after_each(move |target| title.set(resolve_title(&target.meta, &i18n, &config.default_title)));
        }

        Self {
            config,
            session,
            i18n,
            prefs,
            navigator: Arc::new(navigator),
            title,
            theme: RwSignal::new(initial_theme),
            started: Arc::new(AtomicBool::new(false)),
            ready: RwSignal::new(false),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Title of the last committed route.
    pub fn title(&self) -> ReadSignal<String> {
        self.title.read_only()
    }

    pub fn navigate(&self, path: &str) -> NavigationOutcome {
        self.navigator.navigate(path)
    }

    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    /// Flip, persist and apply the theme.
    pub fn toggle_theme(&self) {
        self.theme.set(theme::toggle(self.prefs.as_ref(), self.theme.get_untracked()));
    }

    /// Switch locale and re-resolve the current title.
    pub fn set_locale(&self, code: &str) {
        self.i18n.set_locale(code);
        self.refresh_title();
    }

    /// Re-read locale and theme from the preference store and re-apply them.
    ///
    /// The server pass cannot read browser storage, so markup is rendered
    /// with the defaults; the hydrated client calls this after mount.
    pub fn restore_preferences(&self, environment_language: Option<&str>) {
        self.i18n.restore(environment_language);
        let stored = theme::read_preference(self.prefs.as_ref());
        theme::apply(stored);
        self.theme.set(stored);
        self.refresh_title();
    }

    fn refresh_title(&self) {
        if let Some(current) = self.navigator.current().get_untracked() {
            self.title.set(resolve_title(&current.meta, &self.i18n, &self.config.default_title));
        }
    }

    fn claim_start(&self) -> bool {
        !self.started.swap(true, Ordering::SeqCst)
    }

    /// Client startup: verify the session, then mark the site ready. Runs
    /// once per `Site` together with `prerender`; returns `false` when
    /// startup already ran.
    pub async fn start(&self) -> bool {
        if !self.claim_start() {
            return false;
        }
        log::debug!("verifying session");
        self.session.verify().await;
        self.ready.set(true);
        true
    }

    /// Server-render startup. Makes no network call; the session stays
    /// anonymous and the site is ready at once.
    pub fn prerender(&self) -> bool {
        if !self.claim_start() {
            return false;
        }
        log::debug!("server render; session check deferred to the client");
        self.ready.set(true);
        true
    }

    /// Whether startup has settled. Tracked.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Navigate to `path` once startup has settled; `None` until then.
    pub fn sync(&self, path: &str) -> Option<NavigationOutcome> {
        if !self.is_ready() {
            log::debug!("deferring navigation to {path} until startup settles");
            return None;
        }
        Some(self.navigate(path))
    }
}
