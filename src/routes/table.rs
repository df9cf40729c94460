//! Ordered route table with static, `:param` and catch-all segments.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Where a route's document title comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleSource {
    /// Translation key resolved in the active locale.
    Key(&'static str),
    /// Fixed text used verbatim.
    Static(&'static str),
}

/// Per-route metadata consulted by the guard and the title hook.
///
/// `requires_admin` is checked on its own; it does not rely on
/// `requires_auth` also being set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<TitleSource>,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    #[must_use]
    pub const fn keyed(key: &'static str) -> Self {
        Self { title: Some(TitleSource::Key(key)), requires_auth: false, requires_admin: false }
    }

    #[must_use]
    pub const fn fixed(title: &'static str) -> Self {
        Self { title: Some(TitleSource::Static(title)), requires_auth: false, requires_admin: false }
    }

    #[must_use]
    pub const fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    #[must_use]
    pub const fn admin(mut self) -> Self {
        self.requires_admin = true;
        self
    }
}

/// Page a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
    Login,
    Admin,
    RecipeList,
    RecipeNew,
    RecipeDetail,
    RecipeEdit,
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll,
}

/// A parsed path pattern such as `/recipes/:slug/edit` or `*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            if part == "*" {
                segments.push(Segment::CatchAll);
                break;
            }
            match part.strip_prefix(':') {
                Some(name) => segments.push(Segment::Param(name.to_owned())),
                None => segments.push(Segment::Static(part.to_owned())),
            }
        }
        Self { raw: pattern.to_owned(), segments }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn matches(&self, parts: &[&str]) -> Option<Vec<(String, String)>> {
        let mut params = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll => return Some(params),
                Segment::Static(expected) => {
                    if parts.get(i) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    params.push((name.clone(), (*value).to_owned()));
                }
            }
        }
        (parts.len() == self.segments.len()).then_some(params)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: RoutePattern,
    pub page: Page,
    pub meta: RouteMeta,
}

/// A path resolved against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    /// Normalized request path.
    pub path: String,
    pub page: Page,
    pub meta: RouteMeta,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// Strip query and fragment, drop empty segments, keep a leading slash.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", parts.join("/"))
}

/// Routes in priority order; the first matching pattern wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, pattern: &str, page: Page, meta: RouteMeta) -> Self {
        self.routes.push(RouteDef { pattern: RoutePattern::parse(pattern), page, meta });
        self
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    /// The site's routes, ending in a catch-all not-found page.
    #[must_use]
    pub fn site() -> Self {
        Self::new()
            .route("/", Page::Home, RouteMeta::keyed("title.home"))
            .route("/about", Page::About, RouteMeta::keyed("title.about"))
            .route("/contact", Page::Contact, RouteMeta::keyed("title.contact"))
            .route("/login", Page::Login, RouteMeta::keyed("title.login"))
            .route("/admin", Page::Admin, RouteMeta::keyed("title.admin").admin())
            .route("/recipes", Page::RecipeList, RouteMeta::keyed("title.recipes").authenticated())
            .route("/recipes/new", Page::RecipeNew, RouteMeta::keyed("title.recipe_new").authenticated())
            .route("/recipes/:slug", Page::RecipeDetail, RouteMeta::keyed("title.recipe").authenticated())
            .route(
                "/recipes/:slug/edit",
                Page::RecipeEdit,
                RouteMeta::keyed("title.recipe_edit").authenticated(),
            )
            .route("*", Page::NotFound, RouteMeta::fixed("404 - erez.ac"))
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = normalize_path(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.routes.iter().find_map(|def| {
            def.pattern.matches(&parts).map(|params| RouteMatch {
                path: path.clone(),
                page: def.page,
                meta: def.meta,
                params,
            })
        })
    }
}
