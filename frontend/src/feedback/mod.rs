//! Shared feedback submission.
//!
//! Every feedback surface in the app goes through [`FeedbackRepository`].
//! What differs between surfaces (target collection, how the text is
//! validated, where `createdAt` comes from, whether the e-mail is
//! stored) is described by a [`FeedbackChannel`].

use chrono::{DateTime, Utc};

use crate::api::{ApiError, CreatedAt, FeedbackRecord, Role};

pub mod repository;

pub use repository::FeedbackRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPolicy {
    /// Surrounding whitespace is stripped; nothing left means nothing to send.
    Trimmed,
    /// Stored verbatim; only the empty string is rejected.
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    Server,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackChannel {
    pub collection: &'static str,
    pub text: TextPolicy,
    pub timestamp: TimestampSource,
    pub include_email: bool,
}

impl FeedbackChannel {
    /// The standalone `FeedbackForm`.
    pub const FORM: Self = Self {
        collection: "feedbacks",
        text: TextPolicy::Trimmed,
        timestamp: TimestampSource::Server,
        include_email: false,
    };

    /// The footer form on the vendor landing page.
    pub const VENDOR_HOME: Self = Self {
        collection: "feedback",
        text: TextPolicy::Required,
        timestamp: TimestampSource::Client,
        include_email: true,
    };

    pub fn normalize_text(&self, text: &str) -> Option<String> {
        let text = match self.text {
            TextPolicy::Trimmed => text.trim(),
            TextPolicy::Required => text,
        };
        (!text.is_empty()).then(|| text.to_string())
    }

    pub fn prepare(
        &self,
        submission: FeedbackSubmission,
        now: DateTime<Utc>,
    ) -> Result<FeedbackRecord, ApiError> {
        let feedback = self
            .normalize_text(&submission.text)
            .ok_or_else(|| ApiError::validation("Feedback is required"))?;
        let created_at = match self.timestamp {
            TimestampSource::Server => CreatedAt::ServerTime,
            TimestampSource::Client => CreatedAt::Client(now),
        };
        Ok(FeedbackRecord {
            user_id: submission.user_id,
            role: submission.role,
            feedback,
            email: if self.include_email {
                submission.email
            } else {
                None
            },
            created_at,
        })
    }
}

/// What a form hands over on submit, before channel rules apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub user_id: Option<String>,
    pub role: Role,
    pub email: Option<String>,
    pub text: String,
}

impl FeedbackSubmission {
    pub fn new(user_id: Option<String>, role: Role, text: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            email: None,
            text: text.into(),
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }
}
