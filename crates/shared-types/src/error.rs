use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::MessageBody;

/// Categorization of client-side failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never completed (DNS, connection refused, CORS, ...).
    Network,
    /// The server answered with a non-success status.
    Status,
    /// The response body could not be decoded.
    Decode,
    Unauthorized,
    /// A local precondition failed before any request was sent.
    MissingPrecondition,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Status => write!(f, "Status"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::MissingPrecondition => write!(f, "MissingPrecondition"),
        }
    }
}

/// Structured error shared by the directory clients and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Decode,
            message: message.into(),
            status: None,
        }
    }

    pub fn missing_precondition(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::MissingPrecondition,
            message: message.into(),
            status: None,
        }
    }

    /// Build from a non-success response. The server's `message` (or
    /// `error`) field is used when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.text())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        let kind = if status == 401 || status == 403 {
            AppErrorKind::Unauthorized
        } else {
            AppErrorKind::Status
        };
        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    /// User-facing text for toasts and inline messages.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Unable to reach the server. Please try again.".to_string(),
            AppErrorKind::Decode => "Something went wrong. Please try again.".to_string(),
            AppErrorKind::Unauthorized => {
                "Your session is not authorized. Please log in again.".to_string()
            }
            AppErrorKind::Status | AppErrorKind::MissingPrecondition => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
