use crate::pages::vendor_home::content::PopularProduct;
use leptos::*;

#[component]
pub fn PopularProductsSection(products: &'static [PopularProduct]) -> impl IntoView {
    view! {
        <div class="w-full mb-8">
            <h2 class="text-2xl font-bold text-indigo-700 mb-4 text-center">"🌟 Popular Products"</h2>
            <ul class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                {products
                    .iter()
                    .map(|product| {
                        view! {
                            <li class="bg-white border-2 border-indigo-200 rounded-xl p-6 shadow-md flex flex-col items-center justify-center hover:scale-105 transition-transform">
                                <div class="font-bold text-lg text-indigo-800 mb-1">{product.name}</div>
                                <div class="text-gray-600 text-base text-center">{product.description}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
