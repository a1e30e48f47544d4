//! Client configuration
//!
//! Everything here is fixed at build time. The backend base URL can be
//! overridden by exporting `API_BASE_URL` before running the wasm build.

/// Used when `API_BASE_URL` is unset or empty at build time
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Health probe lives outside the `/api` prefix
pub const HEALTH_CHECK_URL: &str = "http://127.0.0.1:8000/health";

pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// localStorage key of the login flag; value is `"true"` or absent
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";

/// Where a logged-in user lands when opening the login page
pub const DEFAULT_AUTHED_ROUTE: &str = "/rule/manage";

pub const LOGIN_ROUTE: &str = "/";

/// Base URL for API requests
pub fn api_base() -> &'static str {
    resolve_base(option_env!("API_BASE_URL"))
}

fn resolve_base(from_env: Option<&'static str>) -> &'static str {
    match from_env.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Joins without doubling or dropping the separating slash.
/// A trailing slash on `path` is kept, the backend routes depend on it.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
