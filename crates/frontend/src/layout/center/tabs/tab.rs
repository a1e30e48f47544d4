use crate::layout::tabs::{use_tabs, TabItem};
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Tab(tab: TabItem) -> impl IntoView {
    let tabs_store = use_tabs();
    let navigate = use_navigate();

    let path_for_active = tab.path.clone();
    let is_active = Memo::new(move |_| tabs_store.is_active(&path_for_active));

    let path_for_click = tab.path.clone();
    let navigate_for_click = navigate.clone();
    let on_click = move |_| {
        if tabs_store.set_active(&path_for_click) {
            navigate_for_click(&path_for_click, Default::default());
        }
    };

    let path_for_close = tab.path.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(next) = tabs_store.remove_tab(&path_for_close) {
            navigate(&next, Default::default());
        }
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            {tab.closable.then(|| view! {
                <button class="tab-close" on:click=on_close>"×"</button>
            })}
        </div>
    }
}
