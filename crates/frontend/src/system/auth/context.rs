use leptos::prelude::*;

use super::storage;

/// Client-side login flag mirrored into a signal so the route guard
/// re-evaluates as soon as it flips. Not a security boundary: the backend
/// performs no session check.
#[derive(Clone, Copy)]
pub struct AuthFlag {
    logged_in: RwSignal<bool>,
}

impl AuthFlag {
    /// Restores the flag persisted by a previous login
    pub fn restore() -> Self {
        Self {
            logged_in: RwSignal::new(storage::is_logged_in()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    pub fn is_logged_in_untracked(&self) -> bool {
        self.logged_in.get_untracked()
    }

    pub fn login(&self) {
        storage::save_logged_in();
        self.logged_in.set(true);
        log::info!("Logged in");
    }

    pub fn logout(&self) {
        storage::clear_logged_in();
        self.logged_in.set(false);
        log::info!("Logged out");
    }
}

/// Hook to access the login flag
pub fn use_auth() -> AuthFlag {
    use_context::<AuthFlag>().expect("AuthFlag not found in component tree")
}
