//! Navigation guard, evaluated before every route change.

use super::table::{find_route, normalize_path, resolve_alias};
use crate::shared::config::{DEFAULT_AUTHED_ROUTE, LOGIN_ROUTE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Proceed,
    RedirectTo(String),
}

/// Decides where a navigation to `path` ends up.
///
/// 1. protected route while logged out: login page;
/// 2. login page while logged in: the default screen;
/// 3. otherwise the (alias-resolved) target itself.
///
/// Unknown paths carry no auth requirement and proceed to the not-found view.
pub fn evaluate(path: &str, logged_in: bool) -> NavOutcome {
    let requested = normalize_path(path);
    let resolved = resolve_alias(&requested);
    let requires_auth = find_route(&resolved).is_some_and(|r| r.requires_auth);

    let target = if requires_auth && !logged_in {
        LOGIN_ROUTE.to_string()
    } else if resolved == LOGIN_ROUTE && logged_in {
        DEFAULT_AUTHED_ROUTE.to_string()
    } else {
        resolved
    };

    if target == requested {
        NavOutcome::Proceed
    } else {
        NavOutcome::RedirectTo(target)
    }
}
