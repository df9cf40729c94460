//! Document title for a committed route.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use super::table::{RouteMeta, TitleSource};
use crate::i18n::I18n;

/// Translation key through `i18n`, static text verbatim, otherwise the site
/// default.
#[must_use]
pub fn resolve_title(meta: &RouteMeta, i18n: &I18n, default_title: &str) -> String {
    match meta.title {
        Some(TitleSource::Key(key)) => i18n.t(key),
        Some(TitleSource::Static(text)) => text.to_owned(),
        None => default_title.to_owned(),
    }
}
