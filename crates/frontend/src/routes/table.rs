//! Route table: the single source of truth for paths, titles and the
//! auth requirement of every screen.

use crate::layout::tabs::TabItem;
use crate::shared::config::{DEFAULT_AUTHED_ROUTE, LOGIN_ROUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Renders a screen
    View,
    /// Legacy alias, navigation is forwarded to the given path
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub requires_auth: bool,
    /// Shown in the sidebar and opened as a tab
    pub in_menu: bool,
    pub target: RouteTarget,
}

impl RouteSpec {
    const fn page(path: &'static str, title: &'static str, icon: &'static str, requires_auth: bool) -> Self {
        Self {
            path,
            title,
            icon,
            requires_auth,
            in_menu: true,
            target: RouteTarget::View,
        }
    }

    const fn alias(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            title: "",
            icon: "",
            requires_auth: false,
            in_menu: false,
            target: RouteTarget::Redirect(to),
        }
    }
}

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        path: LOGIN_ROUTE,
        title: "Login",
        icon: "",
        requires_auth: false,
        in_menu: false,
        target: RouteTarget::View,
    },
    RouteSpec::alias("/login", LOGIN_ROUTE),
    RouteSpec::page(DEFAULT_AUTHED_ROUTE, "Rule Management", "rules", true),
    RouteSpec::page("/rule/set", "Rule Sets", "layers", true),
    RouteSpec::page("/upload", "Document Upload", "upload", true),
    RouteSpec::page("/batches", "Batches", "play", true),
    RouteSpec::page("/api-test", "API Test", "plug", false),
    RouteSpec::alias("/rules", DEFAULT_AUTHED_ROUTE),
];

/// Strips a trailing slash (except for the root) so `/upload/` and
/// `/upload` are the same route.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn find_route(path: &str) -> Option<&'static RouteSpec> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Follows alias routes to the path that actually renders something.
pub fn resolve_alias(path: &str) -> String {
    let mut current = normalize_path(path);
    // Aliases never chain more than once today; the bound guards a bad table.
    for _ in 0..ROUTES.len() {
        match find_route(&current).map(|r| r.target) {
            Some(RouteTarget::Redirect(to)) => current = to.to_string(),
            _ => break,
        }
    }
    current
}

pub fn menu_routes() -> impl Iterator<Item = &'static RouteSpec> {
    ROUTES.iter().filter(|r| r.in_menu)
}

/// The tab to open when `path` is shown inside the main layout
pub fn tab_for_path(path: &str) -> Option<TabItem> {
    let route = find_route(path).filter(|r| r.in_menu && r.target == RouteTarget::View)?;
    Some(TabItem::new(
        route.path,
        route.title,
        route.path != DEFAULT_AUTHED_ROUTE,
    ))
}

/// Pinned tab every session starts with
pub fn home_tab() -> TabItem {
    let title = find_route(DEFAULT_AUTHED_ROUTE)
        .map(|r| r.title)
        .unwrap_or("Home");
    TabItem::new(DEFAULT_AUTHED_ROUTE, title, false)
}
