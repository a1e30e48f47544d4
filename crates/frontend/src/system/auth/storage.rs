use web_sys::window;

use crate::shared::config::LOGIN_FLAG_KEY;

const LOGGED_IN_VALUE: &str = "true";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the persisted login flag; anything other than `"true"` counts as logged out
pub fn is_logged_in() -> bool {
    get_local_storage()
        .and_then(|s| s.get_item(LOGIN_FLAG_KEY).ok().flatten())
        .is_some_and(|v| parse_flag(&v))
}

/// Persist the login flag
pub fn save_logged_in() {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(LOGIN_FLAG_KEY, LOGGED_IN_VALUE).is_err() {
            log::warn!("localStorage unavailable, login will not survive a reload");
        }
    }
}

/// Remove the login flag
pub fn clear_logged_in() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(LOGIN_FLAG_KEY);
    }
}

fn parse_flag(value: &str) -> bool {
    value == LOGGED_IN_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag(""));
    }
}
