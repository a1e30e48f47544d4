use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabsStore;
use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthFlag;
use crate::usecases::u503_document_upload::UploadedDocuments;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(AuthFlag::restore());
    provide_context(TabsStore::new());
    provide_context(UploadedDocuments::new());

    view! {
        <AppRoutes />
    }
}
