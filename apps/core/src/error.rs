use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents errors specific to the actor system, such as communication failures.
    #[error("Actor error: {0}")]
    Actor(#[from] crate::actors::messages::ActorError),

    /// Represents data validation errors (e.g., blank user input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Invalid configuration: {}", err))
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for AppError {
    fn from(err: tokio::sync::mpsc::error::SendError<T>) -> Self {
        AppError::Actor(crate::actors::messages::ActorError::Closed(err.to_string()))
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for AppError {
    fn from(err: tokio::sync::oneshot::error::RecvError) -> Self {
        AppError::Actor(crate::actors::messages::ActorError::Closed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_elapsed_message_not_doubled() {
        let elapsed = tokio::time::timeout(Duration::from_millis(1), std::future::pending::<()>())
            .await
            .unwrap_err();
        let err = AppError::from(elapsed);

        assert_eq!(err.to_string(), "Operation timed out: deadline has elapsed");
    }
}
