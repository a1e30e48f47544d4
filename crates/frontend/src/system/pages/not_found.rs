use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::config::DEFAULT_AUTHED_ROUTE;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <p>{move || format!("Nothing is registered at '{}'.", location.pathname.get())}</p>
            <A href=DEFAULT_AUTHED_ROUTE>"Back to rule management"</A>
        </div>
    }
}
