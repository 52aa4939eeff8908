//! Error types for the Medium publisher.
//!
//! Every failure the publisher can hit is a [`MediumError`]. Errors are never retried;
//! callers use [`MediumError::category`] to tell the broad failure classes apart.
//!
//! ## Error Categories
//!
//! - **File Access**: missing or unreadable input files
//! - **Parse**: no front matter block, required keys absent, malformed JSON
//! - **Authentication**: missing integration token, token rejected by Medium
//! - **Network**: transport failures and non-success API responses
//! - **Configuration**: invalid settings
//!
//! ## Usage
//!
//! ```rust
//! use medium_pub_rs::error::{ErrorCategory, MediumError};
//!
//! let err = MediumError::missing_field("title");
//! assert_eq!(err.category(), ErrorCategory::Parse);
//! ```

use std::fmt;

/// Result type alias for publisher operations.
pub type Result<T> = std::result::Result<T, MediumError>;

/// Error type for every publisher operation.
#[derive(Debug, thiserror::Error)]
pub enum MediumError {
    /// The input file could not be read.
    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The text has no `---` delimited block.
    #[error("No front matter block found")]
    FrontMatterNotFound,

    /// A required front matter key is absent.
    #[error("Front matter is missing required field `{field}`")]
    MissingField { field: String },

    #[error("MEDIUM_TOKEN is not set")]
    MissingToken,

    /// Medium rejected the integration token.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Transport level failures.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Medium answered with a non-success status.
    #[error("Medium API error [{status}]: {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Generic errors for wrapping other error types
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl MediumError {
    /// Gets the broad failure class of the error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            MediumError::FileRead { .. } | MediumError::Io(_) => ErrorCategory::FileAccess,

            MediumError::FrontMatterNotFound
            | MediumError::MissingField { .. }
            | MediumError::Json(_) => ErrorCategory::Parse,

            MediumError::MissingToken | MediumError::Unauthorized { .. } => {
                ErrorCategory::Authentication
            }

            MediumError::Network(_) | MediumError::Api { .. } => ErrorCategory::Network,

            MediumError::Config { .. } | MediumError::UrlParse(_) => ErrorCategory::Configuration,

            MediumError::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Creates an error from a non-success API response.
    ///
    /// 401 and 403 map to [`MediumError::Unauthorized`].
    pub fn from_api_response(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => MediumError::Unauthorized {
                message: message.into(),
            },
            _ => MediumError::Api {
                status,
                message: message.into(),
            },
        }
    }

    /// Creates a file read error.
    pub fn file_error(path: impl Into<String>, source: std::io::Error) -> Self {
        MediumError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a missing front matter field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        MediumError::MissingField {
            field: field.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        MediumError::Config {
            message: message.into(),
        }
    }
}

/// Broad failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileAccess,
    Parse,
    Authentication,
    Network,
    Configuration,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::FileAccess => write!(f, "FILE_ACCESS"),
            ErrorCategory::Parse => write!(f, "PARSE"),
            ErrorCategory::Authentication => write!(f, "AUTHENTICATION"),
            ErrorCategory::Network => write!(f, "NETWORK"),
            ErrorCategory::Configuration => write!(f, "CONFIGURATION"),
            ErrorCategory::Internal => write!(f, "INTERNAL"),
        }
    }
}
