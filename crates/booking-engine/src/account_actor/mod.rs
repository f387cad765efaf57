//! # Account Actor
//!
//! Resource actor for registered accounts (guests and admins).
//!
//! The account store enforces one account per e-mail address, case-insensitively,
//! via the `on_admit` hook: uniqueness is checked inside the actor against the
//! live store, so two racing registrations for the same address serialise and
//! exactly one wins.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`AccountError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Account;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Account actor and its client.
pub fn new() -> (ResourceActor<Account>, ResourceClient<Account>) {
    ResourceActor::new(32)
}
