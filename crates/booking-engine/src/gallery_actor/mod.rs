//! # Gallery Actor
//!
//! Resource actor for the public promotional gallery. Admin-curated;
//! everyone may list.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`GalleryImage`]
//! - [`error`] - [`GalleryError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::GalleryImage;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Gallery actor and its client.
pub fn new() -> (ResourceActor<GalleryImage>, ResourceClient<GalleryImage>) {
    ResourceActor::new(32)
}
