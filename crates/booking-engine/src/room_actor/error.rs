//! Error types for the Room actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during room catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoomError {
    /// The requested room was not found.
    #[error("Room not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform this operation.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for RoomError {
    fn from(msg: String) -> Self {
        RoomError::ActorCommunication(msg)
    }
}

impl RoomError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RoomError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<RoomError>() {
                Ok(err) => *err,
                Err(other) => RoomError::ActorCommunication(other.to_string()),
            },
            other => RoomError::ActorCommunication(other.to_string()),
        }
    }
}
