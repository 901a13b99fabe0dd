//! Application Error Types
//!
//! Centralized error handling for the API gateway client and the screen
//! models built on top of it.

use reqwest::StatusCode;
use serde::Deserialize;

/// Generic message shown when the backend fails without a usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Ocurrió un error inesperado. Intenta más tarde.";

/// Message shown when the session expired and a redirect to login follows.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesión expirada. Redirigiendo al login...";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response payload: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse error classes the UI reacts to differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failures and timeouts.
    Transport,
    /// 401 from the backend; the session has already been cleared.
    SessionExpired,
    /// 4xx validation style failures carrying a server detail.
    ClientRejected,
    /// 5xx and anything unrecognised coming back from the backend.
    ServerFailure,
    /// Failures raised before any request left the process.
    Local,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) | AppError::Timeout => ErrorKind::Transport,
            AppError::Unauthorized => ErrorKind::SessionExpired,
            AppError::Rejected { .. } => ErrorKind::ClientRejected,
            AppError::Server { .. } | AppError::Decode(_) => ErrorKind::ServerFailure,
            AppError::Validation(_)
            | AppError::NotFound(_)
            | AppError::Storage(_)
            | AppError::Config(_)
            | AppError::Internal(_) => ErrorKind::Local,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }

    /// Text suitable for an inline banner or toast.
    ///
    /// 4xx responses surface the server's `detail`, local validation
    /// surfaces its own message, everything else collapses to a generic
    /// message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            AppError::Rejected { detail, .. } if !detail.is_empty() => detail.clone(),
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Timeout => "La solicitud tardó demasiado. Intenta de nuevo.".to_string(),
            AppError::Network(_) => "No se pudo conectar con el servidor.".to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Inline message for a failed operation, preferring the server detail
    /// and otherwise falling back to the operation's own default copy.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            AppError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            AppError::Rejected { detail, .. } if !detail.is_empty() => detail.clone(),
            AppError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Build the error for a non-success HTTP status and its raw body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let code = status.as_u16();
        if status == StatusCode::UNAUTHORIZED {
            return AppError::Unauthorized;
        }
        if status.is_client_error() {
            return AppError::Rejected {
                status: code,
                detail: extract_detail(body).unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Bad request")
                        .to_string()
                }),
            };
        }
        AppError::Server {
            status: code,
            message: extract_detail(body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Error body shapes produced by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Pull a human readable message out of an error body.
///
/// Accepts `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}` and
/// `{"message": "..."}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    match parsed.detail {
        Some(serde_json::Value::String(s)) if !s.is_empty() => return Some(s),
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    parsed.message.filter(|m| !m.is_empty())
}
