//! Error types shared by the frontend and the backend.

use thiserror::Error;

use crate::model::{TaskId, UserId};

/// Failures reading from a [`crate::source::DataSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Rejected task lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("task {task} cannot move from {from} to {to}")]
    Illegal {
        task: TaskId,
        from: &'static str,
        to: &'static str,
    },

    #[error("poster {0} cannot run their own task")]
    PosterIsRunner(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),
}

/// Parse failures for the string keys used in URLs, query strings and forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown task type: {0:?}")]
    TaskType(String),

    #[error("unknown task filter: {0:?}")]
    TaskFilter(String),

    #[error("star rating must be between 0 and 5, got {0}")]
    StarRating(String),

    #[error("budget must be greater than zero, got {0}")]
    Budget(String),

    #[error("rating score must be between 1 and 5, got {0}")]
    Score(u8),
}

/// Returned when an operation is started while a previous one is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("an operation is already in flight")]
pub struct AlreadyInFlight;
