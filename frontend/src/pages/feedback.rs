use crate::{components::feedback_form::FeedbackForm, state::session::use_session};
use leptos::*;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-xl mx-auto py-12 px-4">
                {move || match session.get() {
                    Some(user) => view! { <FeedbackForm user_id=user.uid role=user.role /> }.into_view(),
                    None => view! {
                        <p class="text-center text-fg-muted">"Sign in to share your feedback."</p>
                    }
                        .into_view(),
                }}
            </div>
        </div>
    }
}
