//! Error types for the Account actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// An account already exists for this e-mail address.
    #[error("E-mail already registered: {0}")]
    EmailAlreadyRegistered(String),

    /// The e-mail is unknown or the credential does not match. Deliberately a
    /// single variant so callers cannot tell which, and probing for registered
    /// addresses through the login path yields nothing.
    #[error("Invalid e-mail or credential")]
    InvalidCredentials,

    /// The requested account was not found.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform this operation.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for AccountError {
    fn from(msg: String) -> Self {
        AccountError::ActorCommunication(msg)
    }
}

impl AccountError {
    /// Unwraps a framework error, surfacing the domain error the entity hooks
    /// produced where there is one.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => AccountError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<AccountError>() {
                Ok(err) => *err,
                Err(other) => AccountError::ActorCommunication(other.to_string()),
            },
            other => AccountError::ActorCommunication(other.to_string()),
        }
    }
}
