use crate::{
    api::{ApiClient, ApiError, DocumentRef, Role},
    feedback::{FeedbackChannel, FeedbackRepository, FeedbackSubmission},
    utils::dialog,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackNotice {
    Submitted,
    Failed,
}

impl FeedbackNotice {
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackNotice::Submitted => "Feedback submitted!",
            FeedbackNotice::Failed => "Error submitting feedback.",
        }
    }
}

#[derive(Clone)]
pub struct FeedbackFormViewModel {
    pub feedback: RwSignal<String>,
    pub notice: RwSignal<Option<FeedbackNotice>>,
    pub submit_action: Action<String, Result<Option<DocumentRef>, ApiError>>,
}

pub fn use_feedback_form_view_model(user_id: String, role: Role) -> FeedbackFormViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = FeedbackRepository::new_with_client(Rc::new(api));

    let feedback = create_rw_signal(String::new());
    let notice = create_rw_signal(None);

    let submit_action = create_action(move |text: &String| {
        let repo = repository.clone();
        let submission = FeedbackSubmission::new(Some(user_id.clone()), role, text.clone());
        async move { submit_feedback(&repo, submission, feedback, notice).await }
    });

    FeedbackFormViewModel {
        feedback,
        notice,
        submit_action,
    }
}

/// Runs one submission through the form channel.
///
/// Blank text is a no-op (`Ok(None)`): no write, no alert. On success the
/// field is cleared; on failure it keeps the user's text.
pub async fn submit_feedback(
    repo: &FeedbackRepository,
    submission: FeedbackSubmission,
    feedback: RwSignal<String>,
    notice: RwSignal<Option<FeedbackNotice>>,
) -> Result<Option<DocumentRef>, ApiError> {
    match repo.submit(&FeedbackChannel::FORM, submission).await {
        Ok(doc) => {
            feedback.set(String::new());
            notice.set(Some(FeedbackNotice::Submitted));
            dialog::alert(FeedbackNotice::Submitted.message());
            Ok(Some(doc))
        }
        Err(err) if err.is_validation() => {
            log::debug!("Skipping feedback submit: {}", err);
            Ok(None)
        }
        Err(err) => {
            log::error!("Error adding feedback: {}", err);
            notice.set(Some(FeedbackNotice::Failed));
            dialog::alert(FeedbackNotice::Failed.message());
            Err(err)
        }
    }
}
