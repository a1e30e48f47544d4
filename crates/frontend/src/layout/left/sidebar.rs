//! Sidebar menu built from the route table

use crate::layout::tabs::use_tabs;
use crate::routes::table::menu_routes;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs = use_tabs();
    let navigate = use_navigate();

    view! {
        <div class="app-sidebar__content">
            {menu_routes().map(|route| {
                let navigate = navigate.clone();
                let path = route.path;
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || tabs.is_active(path)
                        style:padding-left="12px"
                        on:click=move |_| navigate(path, Default::default())
                    >
                        <div class="app-sidebar__item-content">
                            {icon(route.icon)}
                            <span>{route.title}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
