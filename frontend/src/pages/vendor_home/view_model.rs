use crate::{
    api::{ApiClient, ApiError, DocumentRef, Role},
    feedback::{FeedbackChannel, FeedbackRepository, FeedbackSubmission},
    state::session::{use_session, SessionUser},
};
use gloo_timers::callback::Timeout;
use leptos::*;
use std::rc::Rc;

/// How long the thank-you message stays before the footer form closes.
pub const FEEDBACK_RESET_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FooterFeedbackState {
    pub open: bool,
    pub submitted: bool,
}

impl FooterFeedbackState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub fn reset_elapsed(&mut self) {
        self.submitted = false;
        self.open = false;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close Feedback"
        } else {
            "Give Feedback"
        }
    }
}

#[derive(Clone)]
pub struct VendorHomeViewModel {
    pub session: ReadSignal<Option<SessionUser>>,
    pub feedback: RwSignal<String>,
    pub footer: RwSignal<FooterFeedbackState>,
    pub submit_action: Action<String, Result<DocumentRef, ApiError>>,
}

/// Runs a callback once after a delay.
pub trait ResetTimer {
    fn schedule(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed timer owned by the page. Scheduling again replaces
/// (and so cancels) the pending timeout.
#[derive(Clone, Copy)]
pub struct BrowserResetTimer {
    slot: StoredValue<Option<Timeout>>,
}

impl BrowserResetTimer {
    pub fn new() -> Self {
        Self {
            slot: store_value(None),
        }
    }

    pub fn cancel(&self) {
        if let Some(timer) = self.slot.try_update_value(Option::take).flatten() {
            timer.cancel();
        }
    }
}

impl Default for BrowserResetTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetTimer for BrowserResetTimer {
    #[cfg(target_arch = "wasm32")]
    fn schedule(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>) {
        self.slot.set_value(Some(Timeout::new(delay_ms, on_elapsed)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule(&self, delay_ms: u32, _on_elapsed: Box<dyn FnOnce()>) {
        log::debug!("no browser timer off wasm; reset after {} ms skipped", delay_ms);
    }
}

pub fn use_vendor_home_view_model() -> VendorHomeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = FeedbackRepository::new_with_client(Rc::new(api));
    let session = use_session();

    let feedback = create_rw_signal(String::new());
    let footer = create_rw_signal(FooterFeedbackState::default());
    let reset_timer = BrowserResetTimer::new();

    let submit_action = create_action(move |text: &String| {
        let repo = repository.clone();
        let submission = vendor_submission(session.get_untracked().as_ref(), text.clone());
        async move { submit_vendor_feedback(&repo, submission, feedback, footer, &reset_timer).await }
    });

    on_cleanup(move || reset_timer.cancel());

    VendorHomeViewModel {
        session,
        feedback,
        footer,
        submit_action,
    }
}

pub fn vendor_submission(user: Option<&SessionUser>, text: String) -> FeedbackSubmission {
    FeedbackSubmission::new(user.map(|u| u.uid.clone()), Role::Vendor, text)
        .with_email(user.and_then(|u| u.email.clone()))
}

/// Sends the footer form through the vendor-home channel.
///
/// On success the thank-you state is shown and `timer` closes the panel
/// after [`FEEDBACK_RESET_DELAY_MS`]. Failures are logged only; the page
/// shows no error state for them.
pub async fn submit_vendor_feedback(
    repo: &FeedbackRepository,
    submission: FeedbackSubmission,
    feedback: RwSignal<String>,
    footer: RwSignal<FooterFeedbackState>,
    timer: &impl ResetTimer,
) -> Result<DocumentRef, ApiError> {
    match repo.submit(&FeedbackChannel::VENDOR_HOME, submission).await {
        Ok(doc) => {
            footer.update(FooterFeedbackState::mark_submitted);
            feedback.set(String::new());
            timer.schedule(
                FEEDBACK_RESET_DELAY_MS,
                Box::new(move || footer.update(FooterFeedbackState::reset_elapsed)),
            );
            Ok(doc)
        }
        Err(err) => {
            log::error!("Error submitting feedback: {}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_closes_panel_and_clears_success() {
        let mut state = FooterFeedbackState::default();
        state.toggle();
        assert_eq!(state.toggle_label(), "Close Feedback");
        state.mark_submitted();
        state.reset_elapsed();
        assert_eq!(state, FooterFeedbackState::default());
        assert_eq!(state.toggle_label(), "Give Feedback");
    }

    #[test]
    fn toggle_keeps_success_flag() {
        let mut state = FooterFeedbackState {
            open: true,
            submitted: true,
        };
        state.toggle();
        assert!(!state.open);
        assert!(state.submitted);
    }

    #[test]
    fn reset_delay_is_two_seconds() {
        assert_eq!(FEEDBACK_RESET_DELAY_MS, 2_000);
    }

    #[test]
    fn vendor_submission_carries_identity() {
        let user = SessionUser {
            uid: "u1".into(),
            email: Some("ravi@example.com".into()),
            name: None,
            role: Role::Supplier,
        };
        let submission = vendor_submission(Some(&user), "Tasty".into());
        assert_eq!(submission.user_id.as_deref(), Some("u1"));
        assert_eq!(submission.email.as_deref(), Some("ravi@example.com"));
        assert_eq!(submission.role, Role::Vendor);

        let anonymous = vendor_submission(None, "Tasty".into());
        assert!(anonymous.user_id.is_none());
        assert!(anonymous.email.is_none());
    }
}
