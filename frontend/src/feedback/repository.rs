use super::{FeedbackChannel, FeedbackSubmission};
use crate::{
    api::{ApiClient, ApiError, DocumentRef},
    utils::time::now_utc,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct FeedbackRepository {
    client: Rc<ApiClient>,
}

impl FeedbackRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Validates against `channel` and writes one record. Invalid input
    /// returns a validation error without touching the network.
    pub async fn submit(
        &self,
        channel: &FeedbackChannel,
        submission: FeedbackSubmission,
    ) -> Result<DocumentRef, ApiError> {
        let record = channel.prepare(submission, now_utc())?;
        self.client
            .add_feedback(channel.collection, &record, channel.include_email)
            .await
    }
}
