//! # Room Actor
//!
//! Resource actor for the bookable-unit catalog (rooms, villas, cottages).
//!
//! The room store is plain CRUD with no cross-record invariants; the gating
//! logic (only admins mutate the catalog) lives in
//! [`RoomClient`](crate::clients::RoomClient).
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Room`]
//! - [`error`] - [`RoomError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Room;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Room actor and its client.
pub fn new() -> (ResourceActor<Room>, ResourceClient<Room>) {
    ResourceActor::new(32)
}
