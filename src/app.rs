//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::bootstrap::{RenderMode, Site};
use crate::components::header::SiteHeader;
use crate::config::SiteConfig;
use crate::i18n::{self, I18n};
use crate::net::api::HttpSessionApi;
use crate::pages::login::LoginPage;
use crate::routes::navigation::NavigationOutcome;
use crate::routes::table::{Page, RouteMatch};
use crate::util::storage::LocalStorage;

/// The site as wired for the browser.
pub type AppSite = Site<HttpSessionApi>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the `Site` once and provides it as context. In the browser it
/// starts the session check and, after mount, re-applies the stored locale
/// and theme the server pass could not see. The server pass settles startup
/// at once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_env();
    let api = HttpSessionApi::new(config.api_base.clone());
    let environment_language = i18n::environment_language();
    let site = Site::new(config, api, Arc::new(LocalStorage), environment_language.as_deref());

    provide_context(site.clone());

    match RenderMode::current() {
        RenderMode::Client => {
            let startup = site.clone();
            leptos::task::spawn_local(async move {
                startup.start().await;
            });
            let restore = site.clone();
            Effect::new(move || {
                untrack(|| restore.restore_preferences(environment_language.as_deref()));
            });
        }
        RenderMode::Server => {
            site.prerender();
        }
    }

    let title = site.title();

    view! {
        <Stylesheet id="leptos" href="/pkg/homepage.css"/>
        <Title text=move || title.get()/>

        <Router>
            <SiteHeader/>
            <NavigationHost/>
        </Router>
    }
}

/// Feeds every location change to `Site::sync` and renders the committed
/// page.
///
/// The server pass navigates once so the pre-rendered title matches the
/// route. Page bodies render only in the browser, so both sides hydrate from
/// the same placeholder.
#[component]
fn NavigationHost() -> impl IntoView {
    let site = expect_context::<AppSite>();
    let location = use_location();
    let current = site.navigator().current();

    match RenderMode::current() {
        RenderMode::Server => {
            if let Some(outcome) = site.sync(&location.pathname.get_untracked()) {
                report(&outcome);
            }
        }
        RenderMode::Client => {
            let navigate = use_navigate();
            let pipeline = site.clone();
            Effect::new(move || {
                let path = location.pathname.get();
                let Some(outcome) = pipeline.sync(&path) else {
                    return;
                };
                report(&outcome);
                if let NavigationOutcome::Redirected { to, .. } = outcome {
                    navigate(&to.path, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            });
        }
    }

    let i18n = site.i18n;
    let title = site.title();
    let shown = move || if RenderMode::current() == RenderMode::Client { current.get() } else { None };
    view! {
        <main class="site-main">
            {move || match shown() {
                None => view! { <p class="site-main__loading">{i18n.t("status.loading")}</p> }.into_any(),
                Some(route) => page_view(&route, i18n, title),
            }}
        </main>
    }
}

fn report(outcome: &NavigationOutcome) {
    if let NavigationOutcome::Unmatched(path) | NavigationOutcome::RedirectLoop(path) = outcome {
        log::warn!("navigation to {path} did not commit");
    }
}

fn page_view(route: &RouteMatch, i18n: I18n, title: ReadSignal<String>) -> AnyView {
    match route.page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::NotFound => view! {
            <section class="page page--not-found">
                <h1>{i18n.text("page.not_found")}</h1>
            </section>
        }
        .into_any(),
        page => {
            let slug = route.param("slug").map(str::to_owned);
            view! {
                <section class="page" data-page=format!("{page:?}").to_lowercase() data-slug=slug>
                    <h1>{move || title.get()}</h1>
                </section>
            }
            .into_any()
        }
    }
}
