//! Error type for every call made through [`crate::ApiClient`].

use serde_json::Value;

/// Failure of a remote call.
///
/// `Clone + PartialEq` so views can keep the last error in a signal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, TLS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-supplied explanation, if the error body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message for display: the server detail verbatim, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// Build a status error from a raw error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: parse_detail(body),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

/// Extract `detail` from a FastAPI error body.
///
/// Plain errors carry `{"detail": "..."}`; request validation errors carry a
/// list of `{"msg": "..."}` objects, which are joined.
fn parse_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}
