/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/25
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;
use std::io;

/// Result alias used across the crate
pub type EducaResult<T> = Result<T, AppError>;

/// Main error type for the library
///
/// Every failure of the request layer ends up here. The `Display` output of the
/// backend-facing variants is the human-readable message meant for the user, so
/// callers can surface `err.to_string()` directly in an alert.
#[derive(Debug)]
pub enum AppError {
    /// The session is no longer valid (401/403 or an authentication message)
    SessionExpired(String),
    /// The backend rejected the operation with an `error` field
    Domain(String),
    /// Non-2xx response without a usable `error` field
    Http {
        /// Response status
        status: StatusCode,
        /// Message taken from the body, or `HTTP <status>`
        message: String,
    },
    /// Transport level failure (connection, TLS, DNS...)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Filesystem failure
    Io(io::Error),
    /// Caller supplied something unusable
    InvalidInput(String),
    /// Session storage failure
    Storage(String),
}

impl AppError {
    /// Returns true when the error means the user has to log in again
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::SessionExpired(_))
    }

    /// HTTP status carried by the error, when there is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SessionExpired(msg) => write!(f, "{msg}"),
            AppError::Domain(msg) => write!(f, "{msg}"),
            AppError::Http { message, .. } => write!(f, "{message}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "{msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}
