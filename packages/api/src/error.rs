//! Error taxonomy for API calls.
//!
//! The backend reports failures in three shapes:
//!
//! - `401` with any body: the session is gone ([`ApiError::Unauthorized`]).
//! - `422` with `{"detail": [{"loc": [...], "msg": "..."}]}`: field validation
//!   ([`ApiError::Validation`]), rendered as a numbered list.
//! - anything else with `{"detail": "..."}` or `{"message": "..."}`: a single
//!   message ([`ApiError::Server`]).
//!
//! Transport and decoding failures get their own variants so views can show a
//! generic fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a structured validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl ValidationIssue {
    /// The offending field name, when the server points at one (`["body", "vin"]` → `"vin"`).
    pub fn field(&self) -> Option<&str> {
        self.loc.last().and_then(|v| v.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Session expired, please log in again")]
    Unauthorized,

    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Serialize(String),
}

pub(crate) fn fallback_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

fn join_messages(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    /// Parse the body of a non-2xx response. 401 policy is the client's
    /// business, so a 401 body parses like any other.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let detail = parsed.as_ref().and_then(|v| v.get("detail"));

        if let Some(serde_json::Value::Array(items)) = detail {
            let issues: Vec<ValidationIssue> = items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect();
            if !issues.is_empty() {
                return ApiError::Validation(issues);
            }
        }

        let message = detail
            .and_then(|d| d.as_str())
            .or_else(|| parsed.as_ref().and_then(|v| v.get("message")).and_then(|m| m.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| fallback_message(status));

        ApiError::Server { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Lines to show the user: validation issues become `1) msg`, `2) msg`, …;
    /// every other error is a single line.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            ApiError::Validation(issues) => issues
                .iter()
                .enumerate()
                .map(|(idx, issue)| format!("{}) {}", idx + 1, issue.msg))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}
