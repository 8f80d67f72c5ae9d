use crate::pages::vendor_home::content::Offer;
use leptos::*;

#[component]
pub fn OffersSection(offers: &'static [Offer]) -> impl IntoView {
    view! {
        <div class="w-full mb-8">
            <h2 class="text-2xl font-bold text-yellow-600 mb-4 text-center animate-bounce">
                "🔥 Offers for You"
            </h2>
            <ul class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {offers
                    .iter()
                    .enumerate()
                    .map(|(idx, offer)| {
                        view! {
                            <li
                                class="bg-gradient-to-r from-yellow-100 via-white to-yellow-50 text-gray-900 rounded-xl p-6 shadow-lg border-2 border-yellow-400 flex flex-col items-center justify-center animate-fade-in"
                                style=format!("animation: fadeIn 1s ease {:.1}s both", idx as f32 * 0.3)
                            >
                                <div class="font-extrabold text-xl mb-2 drop-shadow-lg text-yellow-700">
                                    {offer.title}
                                </div>
                                <div class="text-gray-700 text-base font-medium text-center">
                                    {offer.description}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
