use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

use super::context::use_auth;
use crate::routes::guard::{evaluate, NavOutcome};

/// Global navigation guard.
///
/// Wraps the route switch: every location change is run through
/// [`evaluate`] before anything renders, and a denied navigation is replaced
/// by a redirect instead of showing an error.
#[component]
pub fn NavigationGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let outcome = Memo::new(move |_| evaluate(&location.pathname.get(), auth.is_logged_in()));

    move || match outcome.get() {
        NavOutcome::Proceed => children(),
        NavOutcome::RedirectTo(path) => {
            log::debug!(
                "guard: '{}' redirected to '{}'",
                location.pathname.get_untracked(),
                path
            );
            view! {
                <Redirect
                    path=path
                    options=NavigateOptions { replace: true, ..Default::default() }
                />
            }
            .into_any()
        }
    }
}
