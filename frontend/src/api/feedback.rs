use super::{
    client::ApiClient,
    firestore,
    types::{ApiError, DocumentRef, FeedbackRecord},
};

impl ApiClient {
    /// Creates one document in `collection`. Never overwrites: the commit
    /// carries an `exists: false` precondition on a fresh id.
    pub async fn add_feedback(
        &self,
        collection: &str,
        record: &FeedbackRecord,
        include_email: bool,
    ) -> Result<DocumentRef, ApiError> {
        let store = self.resolved_store().await;
        let id = firestore::new_document_id();
        let body = firestore::commit_body(&store.project_id, collection, &id, record, include_email);

        let response = self.commit(&body).await?;
        log::debug!(
            "feedback written to {}/{} (commit_time={:?})",
            collection,
            id,
            response.commit_time
        );
        Ok(DocumentRef {
            collection: collection.to_string(),
            id,
        })
    }
}
