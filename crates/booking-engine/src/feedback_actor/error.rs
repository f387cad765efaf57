//! Error types for the Feedback actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during feedback operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeedbackError {
    /// The rating is outside the accepted 1 to 5 range.
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// The requested feedback entry was not found.
    #[error("Feedback not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform this operation.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for FeedbackError {
    fn from(msg: String) -> Self {
        FeedbackError::ActorCommunication(msg)
    }
}

impl FeedbackError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => FeedbackError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<FeedbackError>() {
                Ok(err) => *err,
                Err(other) => FeedbackError::ActorCommunication(other.to_string()),
            },
            other => FeedbackError::ActorCommunication(other.to_string()),
        }
    }
}
