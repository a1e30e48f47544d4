//! Layout wrapper for every screen behind the login page

use crate::layout::center::tabs::TabBar;
use crate::layout::left::Sidebar;
use crate::layout::tabs::use_tabs;
use crate::layout::Shell;
use crate::routes::table::tab_for_path;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

/// Shell with sidebar and tab bar around the routed page.
///
/// Every navigation that lands on a menu route opens (or re-activates) its tab.
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = use_tabs();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let Some(tab) = tab_for_path(&path) {
            tabs_store.add_tab(tab);
        }
    });

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <div class="tabs-container">
                    <TabBar />
                    <div class="tab-content">
                        <Outlet />
                    </div>
                </div>
            }.into_any()
        />
    }
}
