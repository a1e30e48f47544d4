use crate::layout::center::tabs::tab::Tab;
use crate::layout::tabs::use_tabs;
use leptos::prelude::*;

/// One entry per open tab, in opening order
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_tabs();

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.tabs()
                key=|tab| tab.path.clone()
                children=move |tab| view! { <Tab tab=tab /> }
            />
        </div>
    }
}
