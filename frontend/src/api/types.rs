use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Vendor,
    Supplier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Vendor => "vendor",
            Role::Supplier => "supplier",
        }
    }
}

/// Where `createdAt` comes from when the record is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    /// Filled in by the document store at commit time.
    ServerTime,
    Client(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub user_id: Option<String>,
    pub role: Role,
    pub feedback: String,
    pub email: Option<String>,
    pub created_at: CreatedAt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub collection: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    #[serde(default)]
    pub commit_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub write_results: Vec<WriteResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

/// Google API error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GoogleErrorEnvelope {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GoogleErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<GoogleErrorEnvelope>(body) {
            Ok(envelope) => {
                let GoogleErrorBody {
                    code,
                    message,
                    status: status_name,
                    details,
                } = envelope.error;
                let code = if status_name.is_empty() {
                    format!("HTTP_{}", if code == 0 { status } else { code })
                } else {
                    status_name
                };
                let error = if message.is_empty() {
                    format!("Document store returned {}", status)
                } else {
                    message
                };
                Self {
                    error,
                    code,
                    details,
                }
            }
            Err(_) => Self {
                error: format!("Document store returned {}", status),
                code: format!("HTTP_{}", status),
                details: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Supplier).unwrap(), "supplier");
        let parsed: Role = serde_json::from_str("\"vendor\"").unwrap();
        assert_eq!(parsed, Role::Vendor);
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn error_envelope_maps_status_and_message() {
        let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
        let err = ApiError::from_status(403, body);
        assert_eq!(err.code, "PERMISSION_DENIED");
        assert_eq!(err.error, "Missing or insufficient permissions.");
    }

    #[test]
    fn unparsable_error_body_falls_back_to_http_code() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.code, "HTTP_502");
        assert!(err.to_string().contains("502"));
    }
}
