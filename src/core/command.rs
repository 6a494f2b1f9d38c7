use crate::core::library::StoreError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<StoreError> for CommandError {
    fn from(other: StoreError) -> Self {
        match other {
            StoreError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            StoreError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            StoreError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            StoreError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            StoreError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            StoreError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Serialization { message: format!("{}", err) }
    }
}
