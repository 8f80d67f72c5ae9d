use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    pages::{FeedbackPage, VendorHomePage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/vendor", "/feedback"];

/// Destinations linked from the landing page but served elsewhere.
pub const EXTERNAL_LINK_PATHS: &[&str] = &[
    crate::pages::vendor_home::content::BROWSE_PRODUCTS_PATH,
    crate::pages::vendor_home::content::VIEW_ORDERS_PATH,
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=VendorHomePage/>
                    <Route path="/vendor" view=VendorHomePage/>
                    <Route path="/feedback" view=FeedbackPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
