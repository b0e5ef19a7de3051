//! @ai:module:intent Define error types for the recommender
//! @ai:module:layer domain
//! @ai:module:public_api Error, ErrorKind, ErrorReport, Result
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// @ai:intent Unified error type for all store, scoring and workflow operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", not_found_message(.category, .subtask.as_deref()))]
    NotFound {
        category: String,
        subtask: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn not_found_message(category: &str, subtask: Option<&str>) -> String {
    match subtask {
        Some(subtask) => format!("Metrics not found for {} -> {}", category, subtask),
        None => format!("No metrics found for category {}", category),
    }
}

/// @ai:intent Machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Io,
    Parse,
}

impl ErrorKind {
    /// @ai:intent Convert kind to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error {
    /// @ai:intent Shorthand for a missing category/subtask pair
    /// @ai:effects pure
    pub fn subtask_not_found(category: &str, subtask: &str) -> Self {
        Error::NotFound {
            category: category.to_string(),
            subtask: Some(subtask.to_string()),
        }
    }

    /// @ai:intent Shorthand for a missing category
    /// @ai:effects pure
    pub fn category_not_found(category: &str) -> Self {
        Error::NotFound {
            category: category.to_string(),
            subtask: None,
        }
    }

    /// @ai:intent Classify the error
    /// @ai:effects pure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Io(_) => ErrorKind::Io,
            Error::Toml(_) | Error::TomlSer(_) | Error::Json(_) => ErrorKind::Parse,
        }
    }

    /// @ai:intent True when the caller supplied bad input rather than the system failing
    /// @ai:effects pure
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::NotFound)
    }

    /// @ai:intent Build the user-visible form of this error
    /// @ai:effects pure
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// @ai:intent Structured error surfaced to callers (kind + message, no backtrace)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}
