use crate::app_shell::MainLayout;
use crate::domain::a001_rule::ui::list::RuleManagePage;
use crate::domain::a001_rule::ui::sets::RuleSetPage;
use crate::shared::config::{DEFAULT_AUTHED_ROUTE, LOGIN_ROUTE};
use crate::system::auth::NavigationGuard;
use crate::system::pages::api_test::ApiTestPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u501_execute_rule::BatchesPage;
use crate::usecases::u503_document_upload::DocumentUploadPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Router tree. Paths mirror `routes::table::ROUTES`; the guard consults the
/// table before anything here renders.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavigationGuard>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/login") view=|| view! { <Redirect path=LOGIN_ROUTE /> } />
                    <Route path=path!("/rules") view=|| view! { <Redirect path=DEFAULT_AUTHED_ROUTE /> } />
                    <ParentRoute path=path!("") view=MainLayout>
                        <Route path=path!("rule/manage") view=RuleManagePage />
                        <Route path=path!("rule/set") view=RuleSetPage />
                        <Route path=path!("upload") view=DocumentUploadPage />
                        <Route path=path!("batches") view=BatchesPage />
                        <Route path=path!("api-test") view=ApiTestPage />
                    </ParentRoute>
                </Routes>
            </NavigationGuard>
        </Router>
    }
}
