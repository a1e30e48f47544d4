//! Application top bar: sidebar toggle, title, backend health and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::config::LOGIN_ROUTE;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use crate::system::health::HealthIndicator;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        auth.logout();
        navigate(
            LOGIN_ROUTE,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Rule Console"</span>
            </div>

            <div class="top-header__actions">
                <HealthIndicator />
                <button
                    class="top-header__icon-btn"
                    class:hidden=move || !auth.is_logged_in()
                    on:click=logout
                    title="Log out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
