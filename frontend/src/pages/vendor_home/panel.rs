use crate::pages::vendor_home::{
    components::{FeedbackFooter, OffersSection, PopularProductsSection},
    content::{BRAND_NAME, BROWSE_PRODUCTS_PATH, OFFERS, POPULAR_PRODUCTS, VIEW_ORDERS_PATH},
    view_model::use_vendor_home_view_model,
};
use crate::state::session::greeting_name;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn VendorHomePage() -> impl IntoView {
    let vm = use_vendor_home_view_model();
    let session = vm.session;
    let greeting = move || format!("Welcome, {}!", greeting_name(session.get().as_ref(), "Vendor"));

    view! {
        <Title text=BRAND_NAME/>
        <div class="flex flex-col min-h-screen bg-gradient-to-br from-white via-gray-100 to-gray-200">
            <div class="flex-grow">
                <div class="max-w-full mx-auto px-0 py-8">
                    <h1 class="text-4xl font-extrabold text-indigo-800 mb-2 text-center drop-shadow-lg animate-fade-in">
                        {greeting}
                    </h1>
                    <div class="text-lg text-gray-600 mb-8 text-center">
                        {format!("to {}", BRAND_NAME)}
                    </div>

                    <OffersSection offers=OFFERS />
                    <PopularProductsSection products=POPULAR_PRODUCTS />

                    <div class="flex flex-col sm:flex-row gap-6 mt-8 w-full justify-center">
                        <a
                            href=BROWSE_PRODUCTS_PATH
                            class="w-full sm:w-auto bg-indigo-700 text-white px-8 py-4 rounded-xl shadow-lg hover:bg-indigo-800 text-xl font-bold text-center transition-all duration-300"
                        >
                            "Browse Products"
                        </a>
                        <a
                            href=VIEW_ORDERS_PATH
                            class="w-full sm:w-auto bg-yellow-500 text-white px-8 py-4 rounded-xl shadow-lg hover:bg-yellow-600 text-xl font-bold text-center transition-all duration-300"
                        >
                            "View Orders"
                        </a>
                    </div>
                </div>
            </div>

            <FeedbackFooter
                footer=vm.footer
                feedback=vm.feedback
                submit_action=vm.submit_action
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::state::session::SessionUser;
    use crate::test_support::ssr::render_page_to_string;

    #[test]
    fn vendor_home_renders_marketing_content() {
        let html = render_page_to_string(|| view! { <VendorHomePage /> });
        assert!(html.contains("Welcome, Vendor!"));
        assert!(html.contains("to Street Food Hub"));
        assert!(html.contains("10% Off on First Order!"));
        assert!(html.contains("Free Delivery"));
        for product in ["Fresh Tomatoes", "Paneer", "Masala Mix"] {
            assert!(html.contains(product), "missing product {}", product);
        }
        assert!(html.contains("/vendor/dashboard"));
        assert!(html.contains("/vendor/orders"));
        assert!(html.contains("support@streetfoodhub.com"));
    }

    #[test]
    fn feedback_panel_starts_closed() {
        let html = render_page_to_string(|| view! { <VendorHomePage /> });
        assert!(html.contains("Give Feedback"));
        assert!(!html.contains("Your feedback..."));
        assert!(!html.contains("Thank you for your feedback!"));
    }

    #[test]
    fn greeting_uses_session_user() {
        let html = render_page_to_string(|| {
            let (user, _) = create_signal(Some(SessionUser {
                uid: "u1".into(),
                email: Some("ravi@example.com".into()),
                name: None,
                role: Role::Vendor,
            }));
            provide_context(user);
            view! { <VendorHomePage /> }
        });
        assert!(html.contains("Welcome, ravi!"));
    }
}
