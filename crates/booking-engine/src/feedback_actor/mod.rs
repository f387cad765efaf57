//! # Feedback Actor
//!
//! Resource actor for guest reviews. Ratings are validated into `1..=5` at
//! creation; entries are immutable afterwards.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Feedback`]
//! - [`error`] - [`FeedbackError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Feedback;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Feedback actor and its client.
pub fn new() -> (ResourceActor<Feedback>, ResourceClient<Feedback>) {
    ResourceActor::new(32)
}
