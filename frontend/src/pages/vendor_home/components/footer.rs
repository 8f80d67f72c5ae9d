use crate::{
    api::{ApiError, DocumentRef},
    pages::vendor_home::{
        content::{BRAND_NAME, SUPPORT_EMAIL},
        view_model::FooterFeedbackState,
    },
    utils::time::current_year,
};
use leptos::*;

#[component]
pub fn FeedbackFooter(
    footer: RwSignal<FooterFeedbackState>,
    feedback: RwSignal<String>,
    submit_action: Action<String, Result<DocumentRef, ApiError>>,
) -> impl IntoView {
    let is_submitting = submit_action.pending();
    let year = current_year();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        submit_action.dispatch(feedback.get_untracked());
    };

    view! {
        <footer class="bg-gray-800 text-white py-4 px-6">
            <div class="container mx-auto flex flex-col md:flex-row justify-between items-center">
                <div class="flex items-center space-x-4 mb-4 md:mb-0">
                    <i class="fas fa-phone text-indigo-300"></i>
                    <i class="fas fa-envelope text-indigo-300"></i>
                    <span class="text-sm">{SUPPORT_EMAIL}</span>
                </div>
                <div class="flex items-center space-x-4">
                    <button
                        type="button"
                        class="flex items-center text-sm hover:text-indigo-300 transition-colors"
                        on:click=move |_| footer.update(FooterFeedbackState::toggle)
                    >
                        <i class="fas fa-comment-alt mr-2"></i>
                        {move || footer.get().toggle_label()}
                    </button>
                    <span class="text-xs text-gray-400">
                        {format!("© {} {}", year, BRAND_NAME)}
                    </span>
                </div>
            </div>

            <Show when=move || footer.get().open fallback=|| ()>
                <div class="container mx-auto mt-4 bg-gray-700 rounded-lg p-4">
                    {move || {
                        if footer.get().submitted {
                            view! {
                                <div class="text-green-400 text-center">
                                    "Thank you for your feedback!"
                                </div>
                            }
                                .into_view()
                        } else {
                            view! {
                                <form on:submit=on_submit class="flex flex-col space-y-2">
                                    <textarea
                                        class="w-full p-2 rounded text-gray-800 text-sm"
                                        rows="2"
                                        placeholder="Your feedback..."
                                        required
                                        prop:value=move || feedback.get()
                                        on:input=move |ev| feedback.set(event_target_value(&ev))
                                    ></textarea>
                                    <button
                                        type="submit"
                                        class="bg-indigo-600 hover:bg-indigo-700 text-white px-3 py-1 rounded text-sm self-end disabled:opacity-50"
                                        disabled=move || is_submitting.get()
                                    >
                                        {move || if is_submitting.get() { "Sending..." } else { "Submit" }}
                                    </button>
                                </form>
                            }
                                .into_view()
                        }
                    }}
                </div>
            </Show>
        </footer>
    }
}
