use crate::core::quiz::QuizError;
use std::time::Duration;
use thiserror::Error;

/// Why a quiz payload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The text was not a JSON object.
    InvalidJson,
    /// The object had no usable `question`.
    MissingQuestion,
    /// Options, answer or explanation were missing or inconsistent.
    InvalidQuiz,
}

impl From<&QuizError> for MalformedKind {
    fn from(err: &QuizError) -> Self {
        match err {
            QuizError::InvalidJson(_) => MalformedKind::InvalidJson,
            QuizError::MissingQuestion => MalformedKind::MissingQuestion,
            QuizError::TooFewOptions(_)
            | QuizError::InvalidAnswer { .. }
            | QuizError::MissingExplanation => MalformedKind::InvalidQuiz,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed model response: {0:?}")]
    Malformed(MalformedKind),
}

impl From<QuizError> for ServiceError {
    fn from(err: QuizError) -> Self {
        ServiceError::Malformed(MalformedKind::from(&err))
    }
}
