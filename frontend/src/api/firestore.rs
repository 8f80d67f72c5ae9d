//! Firestore REST wire format for create-only document writes.
//!
//! Field values use Firestore's typed encoding (`stringValue`,
//! `timestampValue`, `nullValue`). A server timestamp is not a value at
//! all: it travels as an `updateTransforms` entry and is resolved at
//! commit time.

use chrono::SecondsFormat;
use serde_json::{json, Map, Value};

use super::types::{CreatedAt, FeedbackRecord};

pub const CREATED_AT_FIELD: &str = "createdAt";

pub fn database_path(project_id: &str) -> String {
    format!("projects/{}/databases/(default)", project_id)
}

pub fn document_name(project_id: &str, collection: &str, document_id: &str) -> String {
    format!(
        "{}/documents/{}/{}",
        database_path(project_id),
        collection,
        document_id
    )
}

/// Client-side id for a new document, unique per write.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

fn optional_string_value(value: Option<&str>) -> Value {
    match value {
        Some(v) => string_value(v),
        None => json!({ "nullValue": null }),
    }
}

pub fn encode_fields(record: &FeedbackRecord, include_email: bool) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "userId".into(),
        optional_string_value(record.user_id.as_deref()),
    );
    fields.insert("role".into(), string_value(record.role.as_str()));
    fields.insert("feedback".into(), string_value(&record.feedback));
    if include_email {
        fields.insert("email".into(), optional_string_value(record.email.as_deref()));
    }
    if let CreatedAt::Client(at) = record.created_at {
        fields.insert(
            CREATED_AT_FIELD.into(),
            json!({ "timestampValue": at.to_rfc3339_opts(SecondsFormat::Micros, true) }),
        );
    }
    fields
}

pub fn commit_body(
    project_id: &str,
    collection: &str,
    document_id: &str,
    record: &FeedbackRecord,
    include_email: bool,
) -> Value {
    let mut write = json!({
        "update": {
            "name": document_name(project_id, collection, document_id),
            "fields": Value::Object(encode_fields(record, include_email)),
        },
        "currentDocument": { "exists": false },
    });
    if record.created_at == CreatedAt::ServerTime {
        write["updateTransforms"] = json!([{
            "fieldPath": CREATED_AT_FIELD,
            "setToServerValue": "REQUEST_TIME",
        }]);
    }
    json!({ "writes": [write] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;
    use chrono::{TimeZone, Utc};

    fn record(created_at: CreatedAt) -> FeedbackRecord {
        FeedbackRecord {
            user_id: Some("u1".into()),
            role: Role::Vendor,
            feedback: "Great service!".into(),
            email: Some("ravi@example.com".into()),
            created_at,
        }
    }

    #[test]
    fn server_time_is_sent_as_transform_not_field() {
        let body = commit_body("demo", "feedbacks", "doc1", &record(CreatedAt::ServerTime), false);
        let write = &body["writes"][0];
        assert_eq!(
            write["update"]["name"],
            "projects/demo/databases/(default)/documents/feedbacks/doc1"
        );
        assert!(write["update"]["fields"].get(CREATED_AT_FIELD).is_none());
        assert!(write["update"]["fields"].get("email").is_none());
        assert_eq!(write["updateTransforms"][0]["setToServerValue"], "REQUEST_TIME");
        assert_eq!(write["currentDocument"]["exists"], false);
    }

    #[test]
    fn client_time_is_encoded_as_timestamp_value() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        let body = commit_body("demo", "feedback", "doc2", &record(CreatedAt::Client(at)), true);
        let fields = &body["writes"][0]["update"]["fields"];
        assert_eq!(
            fields[CREATED_AT_FIELD]["timestampValue"],
            "2025-03-04T05:06:07.000000Z"
        );
        assert_eq!(fields["email"]["stringValue"], "ravi@example.com");
        assert!(body["writes"][0].get("updateTransforms").is_none());
    }

    #[test]
    fn missing_identity_is_written_as_null() {
        let mut anonymous = record(CreatedAt::ServerTime);
        anonymous.user_id = None;
        anonymous.email = None;
        let fields = encode_fields(&anonymous, true);
        assert_eq!(fields["userId"], json!({ "nullValue": null }));
        assert_eq!(fields["email"], json!({ "nullValue": null }));
    }

    #[test]
    fn document_ids_are_unique() {
        assert_ne!(new_document_id(), new_document_id());
        assert_eq!(new_document_id().len(), 32);
    }
}
