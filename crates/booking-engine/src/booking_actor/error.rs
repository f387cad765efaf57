//! Error types for the Booking actor.

use crate::model::{BookingStatus, StayType};
use crate::pricing::PricingError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// Check-out does not fall strictly after check-in.
    #[error("Check-out must be after check-in")]
    InvalidDateRange,

    /// No payment proof was attached to the booking request.
    #[error("A payment proof is required")]
    MissingPaymentProof,

    /// The requested room does not exist in the catalog.
    #[error("Room unavailable: {0}")]
    RoomUnavailable(String),

    /// The requested stay type does not match the room's category.
    #[error("Stay type mismatch: {requested:?} booking for a {expected:?} unit")]
    StayTypeMismatch {
        expected: StayType,
        requested: StayType,
    },

    /// A booking with this id already exists (restore path).
    #[error("Duplicate booking id: {0}")]
    DuplicateId(String),

    /// The requested booking was not found.
    #[error("Booking not found: {0}")]
    NotFound(String),

    /// The booking's current status does not permit the requested transition.
    #[error("Booking is already {from}, no further transitions allowed")]
    InvalidTransition { from: BookingStatus },

    /// The caller is not allowed to perform this operation.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for BookingError {
    fn from(msg: String) -> Self {
        BookingError::ActorCommunication(msg)
    }
}

impl From<PricingError> for BookingError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::InvalidDateRange => BookingError::InvalidDateRange,
        }
    }
}

impl BookingError {
    /// Unwraps a framework error, surfacing the domain error the entity hooks
    /// produced where there is one.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => BookingError::NotFound(id),
            FrameworkError::DuplicateId(id) => BookingError::DuplicateId(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<BookingError>() {
                Ok(err) => *err,
                Err(other) => BookingError::ActorCommunication(other.to_string()),
            },
            other => BookingError::ActorCommunication(other.to_string()),
        }
    }
}
