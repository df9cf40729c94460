//! Locale selection and message lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page titles and UI strings go through `I18n::resolve`. Message tables for
//! every supported locale are embedded at build time from `locales/*.json`.
//!
//! INVARIANTS
//! ==========
//! - The active locale is always one of `Locale::supported()`.
//! - Lookup tries the active table, then the default table, then returns the
//!   key itself, so it never fails and never loops.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use leptos::prelude::*;

use crate::util::storage::Preferences;

pub const LOCALE_KEY: &str = "locale";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fi,
}

const SUPPORTED: &[Locale] = &[Locale::En, Locale::Fi];

impl Locale {
    pub const DEFAULT: Self = Self::En;

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fi => "fi",
        }
    }

    #[must_use]
    pub const fn supported() -> &'static [Self] {
        SUPPORTED
    }

    /// Exact match against the supported locale codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED.iter().copied().find(|l| l.code() == code)
    }

    /// Pick the startup locale: stored preference, then the environment
    /// language's two-letter primary tag, then the default.
    #[must_use]
    pub fn detect(stored: Option<&str>, environment: Option<&str>) -> Self {
        stored
            .and_then(Self::from_code)
            .or_else(|| environment.and_then(|lang| lang.get(..2)).and_then(Self::from_code))
            .unwrap_or(Self::DEFAULT)
    }
}

/// Message templates per locale.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

static EMBEDDED: LazyLock<Arc<Catalog>> = LazyLock::new(|| Arc::new(Catalog::embedded()));

fn parse_table(locale: Locale, raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("message table for {} is invalid: {err}", locale.code());
        HashMap::new()
    })
}

impl Catalog {
    fn embedded() -> Self {
        let mut catalog = Self::default();
        catalog.insert(Locale::En, parse_table(Locale::En, include_str!("../locales/en.json")));
        catalog.insert(Locale::Fi, parse_table(Locale::Fi, include_str!("../locales/fi.json")));
        catalog
    }

    pub fn insert(&mut self, locale: Locale, table: HashMap<String, String>) {
        self.tables.insert(locale, table);
    }

    fn template(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)?
            .get(key)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Template for `key` in `locale`, falling back to the default locale and
    /// finally to the key.
    #[must_use]
    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.template(locale, key)
            .or_else(|| self.template(Locale::DEFAULT, key))
            .unwrap_or_else(|| {
                log::debug!("missing translation for {key}");
                key
            })
    }
}

/// Replace every `{name}` in `template` with its value; unknown
/// placeholders stay as is. Substituted values are never scanned again.
#[must_use]
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let substitution = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            params.iter().find(|(n, _)| *n == name).map(|(_, value)| (close, *value))
        });
        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Browser-reported language (`navigator.language`), if any.
pub fn environment_language() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.navigator().language()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn apply_document_lang(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", locale.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}

/// Active locale plus the catalog it reads from.
///
/// A `Copy` handle: the catalog and preference store live in the reactive
/// arena so views can capture the resolver by value.
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
    catalog: StoredValue<Arc<Catalog>>,
    prefs: StoredValue<Arc<dyn Preferences>>,
}

impl I18n {
    /// Embedded catalog, startup locale detected from `prefs` and
    /// `environment_language`.
    pub fn new(prefs: Arc<dyn Preferences>, environment_language: Option<&str>) -> Self {
        Self::with_catalog(Arc::clone(&EMBEDDED), prefs, environment_language)
    }

    pub fn with_catalog(
        catalog: Arc<Catalog>,
        prefs: Arc<dyn Preferences>,
        environment_language: Option<&str>,
    ) -> Self {
        let stored = prefs.get(LOCALE_KEY);
        let locale = Locale::detect(stored.as_deref(), environment_language);
        apply_document_lang(locale);
        Self {
            locale: RwSignal::new(locale),
            catalog: StoredValue::new(catalog),
            prefs: StoredValue::new(prefs),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Resolve `key` in the active locale and substitute `params`.
    pub fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        let locale = self.locale.get();
        self.catalog.with_value(|catalog| {
            let template = catalog.lookup(locale, key);
            if params.is_empty() { template.to_owned() } else { interpolate(template, params) }
        })
    }

    pub fn t(&self, key: &str) -> String {
        self.resolve(key, &[])
    }

    /// Reactive text for views; re-resolves when the locale changes.
    pub fn text(self, key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || self.t(key)
    }

    /// Re-detect the locale from the stored preference and environment
    /// language without persisting. Always notifies subscribers, so text
    /// rendered before the preference was readable is refreshed.
    pub fn restore(&self, environment_language: Option<&str>) {
        let stored = self.prefs.with_value(|prefs| prefs.get(LOCALE_KEY));
        let locale = Locale::detect(stored.as_deref(), environment_language);
        self.locale.set(locale);
        apply_document_lang(locale);
    }

    /// Switch locale and persist the choice. Unsupported codes are ignored.
    pub fn set_locale(&self, code: &str) {
        let Some(locale) = Locale::from_code(code) else {
            log::debug!("ignoring unsupported locale {code:?}");
            return;
        };
        self.locale.set(locale);
        self.prefs.with_value(|prefs| prefs.set(LOCALE_KEY, locale.code()));
        apply_document_lang(locale);
    }
}
