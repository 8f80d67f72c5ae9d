use crate::api::Role;
use leptos::*;

mod view_model;

use view_model::use_feedback_form_view_model;

#[component]
pub fn FeedbackForm(#[prop(into)] user_id: String, role: Role) -> impl IntoView {
    let vm = use_feedback_form_view_model(user_id, role);
    let feedback = vm.feedback;
    let notice = vm.notice;
    let submit_action = vm.submit_action;
    let loading = submit_action.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        submit_action.dispatch(feedback.get_untracked());
    };

    view! {
        <form on:submit=on_submit class="p-4 border border-border rounded bg-surface-elevated shadow">
            <h2 class="text-lg font-semibold mb-2 text-fg">"Submit Feedback"</h2>
            <textarea
                class="w-full p-2 border border-form-control-border rounded mb-2 bg-form-control-bg text-form-control-text"
                rows="4"
                placeholder="Enter your feedback..."
                prop:value=move || feedback.get()
                on:input=move |ev| feedback.set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="bg-action-primary-bg text-action-primary-text px-4 py-2 rounded disabled:opacity-50"
                disabled=move || loading.get()
            >
                {move || if loading.get() { "Submitting..." } else { "Submit Feedback" }}
            </button>
            <p class="sr-only" role="status">
                {move || notice.get().map(|n| n.message()).unwrap_or_default()}
            </p>
        </form>
    }
}
