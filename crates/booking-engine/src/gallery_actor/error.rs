//! Error types for the Gallery actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during gallery operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GalleryError {
    /// The requested image was not found.
    #[error("Gallery image not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform this operation.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for GalleryError {
    fn from(msg: String) -> Self {
        GalleryError::ActorCommunication(msg)
    }
}

impl GalleryError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => GalleryError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<GalleryError>() {
                Ok(err) => *err,
                Err(other) => GalleryError::ActorCommunication(other.to_string()),
            },
            other => GalleryError::ActorCommunication(other.to_string()),
        }
    }
}
