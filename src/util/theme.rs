//! Light/dark theme preference.
//!
//! Reads the stored choice from the `theme` preference, falling back to the
//! system color scheme, and toggles the `dark` class on the `<html>` element.
//! Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::Preferences;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Any non-empty value other than `"dark"`
    /// means light; an empty value means no stored choice.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Stored preference first, then the system color scheme.
pub fn read_preference(prefs: &dyn Preferences) -> Theme {
    if let Some(theme) = prefs.get(THEME_KEY).as_deref().and_then(Theme::from_stored) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

/// Toggle the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.class_list().toggle_with_force("dark", theme == Theme::Dark);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, persist it and apply it.
pub fn toggle(prefs: &dyn Preferences, current: Theme) -> Theme {
    let next = current.toggled();
    prefs.set(THEME_KEY, next.as_str());
    apply(next);
    next
}
