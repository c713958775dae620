//! Error types for spacetraveling
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The listing and navigation components only ever surface three kinds of
//! failure to their callers: `FetchFailed`, `NoMorePages` and
//! `MalformedDocument`. Transport-level variants are produced by the HTTP
//! and CMS layers and get folded into `FetchFailed` at that boundary.

use thiserror::Error;

/// The main error type for spacetraveling
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Listing / Navigation Errors
    // ============================================================================
    #[error("Fetch failed: {message}")]
    FetchFailed { message: String },

    #[error("No more pages to load")]
    NoMorePages,

    #[error("Malformed document{}: missing '{field}'", uid_suffix(.uid.as_deref()))]
    MalformedDocument { uid: Option<String>, field: String },

    #[error("Document '{uid}' of type '{doc_type}' not found")]
    DocumentNotFound { doc_type: String, uid: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a fetch failure error
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create a malformed document error
    pub fn malformed(uid: Option<&str>, field: impl Into<String>) -> Self {
        Self::MalformedDocument {
            uid: uid.map(str::to_string),
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Fold a source-side error into `FetchFailed`.
    ///
    /// Errors that are already part of the listing/navigation taxonomy are
    /// returned untouched so they are never double wrapped.
    pub fn into_fetch_failed(self) -> Self {
        match self {
            Error::FetchFailed { .. }
            | Error::NoMorePages
            | Error::MalformedDocument { .. }
            | Error::DocumentNotFound { .. } => self,
            other => Error::FetchFailed {
                message: other.to_string(),
            },
        }
    }

    /// Check if this is a fetch failure
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Error::FetchFailed { .. })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

fn uid_suffix(uid: Option<&str>) -> String {
    uid.map(|u| format!(" '{u}'")).unwrap_or_default()
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for spacetraveling
pub type Result<T> = std::result::Result<T, Error>;
