//! # Booking Actor
//!
//! Resource actor for guest reservations, the centrepiece of the engine.
//!
//! A booking is validated and priced once, at creation, inside
//! `from_create_params`: missing payment proof, a stay type that does not match
//! the room's category, and a non-positive date range are all rejected before
//! the record ever enters the store. After that the only mutation is the status
//! state machine, driven by [`BookingAction`]:
//!
//! ```text
//! Pending --Approve--> Approved
//! Pending --Decline--> Declined
//! ```
//!
//! Both target states are terminal. A successful transition hands the updated
//! booking to the [`NotificationAdapter`] on a spawned task, so a slow or
//! failing notifier never blocks the actor loop and never rolls the
//! transition back.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Booking`]
//! - [`error`] - [`BookingError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::adapters::NotificationAdapter;
use crate::model::Booking;
use resource_actor::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Status transitions an admin can request on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Approve,
    Decline,
}

/// Dependencies injected into the booking actor at `run()`.
#[derive(Clone)]
pub struct BookingContext {
    pub notifier: Arc<dyn NotificationAdapter>,
}

/// Creates a new Booking actor and its client.
pub fn new() -> (ResourceActor<Booking>, ResourceClient<Booking>) {
    ResourceActor::new(32)
}
