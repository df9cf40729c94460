//! Site header with navigation, session status, locale and theme toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links to gated pages are shown only when the session allows them; the
//! route guard still enforces access on navigation.

use leptos::prelude::*;

use crate::app::AppSite;
use crate::i18n::Locale;
use crate::state::session::SessionState;
use crate::util::theme::Theme;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let site = expect_context::<AppSite>();
    let theme = site.theme();
    let i18n = site.i18n;
    let state = site.session.state();

    let authenticated = move || state.with(SessionState::is_authenticated);
    let admin = move || state.with(SessionState::is_admin);
    let signed_in_as = move || {
        state.with(|s| {
            s.identity
                .as_ref()
                .map(|identity| i18n.resolve("auth.signed_in_as", &[("name", identity.display_name())]))
        })
    };

    #[cfg(feature = "hydrate")]
    let session = site.session.clone();
    let logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move { session.logout().await });
        }
    });

    let theme_site = site.clone();
    let toggle_theme = Callback::new(move |()| theme_site.toggle_theme());

    let locale_site = site.clone();
    let switch_locale = Callback::new(move |()| {
        let next = match locale_site.i18n.locale() {
            Locale::En => Locale::Fi,
            Locale::Fi => Locale::En,
        };
        locale_site.set_locale(next.code());
    });

    view! {
        <header class="site-header">
            <nav class="site-nav">
                <a href="/">{i18n.text("nav.home")}</a>
                <a href="/about">{i18n.text("nav.about")}</a>
                <a href="/contact">{i18n.text("nav.contact")}</a>
                {move || authenticated().then(|| view! { <a href="/recipes">{i18n.t("nav.recipes")}</a> })}
                {move || admin().then(|| view! { <a href="/admin">{i18n.t("nav.admin")}</a> })}
            </nav>
            <span class="site-header__spacer"></span>
            <span class="site-header__identity">{signed_in_as}</span>
            {move || {
                if authenticated() {
                    view! {
                        <button class="btn" on:click=move |_| logout.run(())>
                            {i18n.t("nav.logout")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <a class="btn" href="/login">{i18n.t("nav.login")}</a> }.into_any()
                }
            }}
            <button class="btn" on:click=move |_| switch_locale.run(())>
                {i18n.text("locale.switch")}
            </button>
            <button
                class="btn site-header__theme"
                title=i18n.text("theme.toggle")
                on:click=move |_| toggle_theme.run(())
            >
                {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
