//! Site configuration.
//!
//! Values are baked in at build time from `SITE_API_BASE`, `SITE_LOGIN_PATH`
//! and `SITE_TITLE`; unset or blank variables keep the defaults. The WASM
//! bundle has no process environment at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix for the session endpoints; empty means same origin.
    pub api_base: String,
    /// Where guarded routes redirect.
    pub login_path: String,
    /// Title used when a route declares none.
    pub default_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: "/login".to_owned(),
            default_title: "erez.ac".to_owned(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl SiteConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("SITE_API_BASE"),
            option_env!("SITE_LOGIN_PATH"),
            option_env!("SITE_TITLE"),
        )
    }

    fn from_values(api_base: Option<&str>, login_path: Option<&str>, title: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = non_blank(api_base) {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        if let Some(path) = non_blank(login_path) {
            config.login_path = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };
        }
        if let Some(title) = non_blank(title) {
            config.default_title = title.to_owned();
        }
        config
    }
}
