use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum StoreError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    // Returned by a backing store that is temporarily unable to serve lookups.
    // The caller decides whether to retry; the catalog service never does.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl StoreError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> StoreError {
        StoreError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> StoreError {
        StoreError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> StoreError {
        StoreError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> StoreError {
        StoreError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> StoreError {
        StoreError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> StoreError {
        StoreError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            StoreError::Database { retryable, .. } => { *retryable }
            StoreError::NotFound { .. } => { false }
            StoreError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            StoreError::Validation { .. } => { false }
            StoreError::Serialization { .. } => { false }
            StoreError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::runtime(
            format!("catalog io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            StoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            StoreError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            StoreError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            StoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            StoreError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// A specialized Result type for book repositories and the catalog service.
pub type StoreResult<T> = Result<T, StoreError>;
