//! # Resource Actor
//!
//! Building blocks for type-safe, concurrent resource actors: each collection of
//! entities (rooms, accounts, bookings, ...) is owned by a single Tokio task that
//! processes requests sequentially over a channel. The pattern gives every
//! collection a uniform CRUD + Action API with no locks and no shared mutable
//! state.
//!
//! ## Why an actor per collection?
//!
//! - **Serialized writes**: one message at a time means two concurrent mutations
//!   of the same record cannot interleave; the second observes the first's
//!   result.
//! - **Snapshot reads**: `List` clones the store between messages, so a reader
//!   never sees a partial write, even while other callers keep mutating.
//! - **Isolated state**: the store lives inside the task; everything else talks
//!   to it through a cloneable [`ResourceClient`].
//!
//! ## Core pieces
//!
//! 1. **Entity layer** ([`ActorEntity`]) - the domain type, its DTOs, its hooks.
//! 2. **Runtime layer** ([`ResourceActor`]) - the event loop owning the store.
//! 3. **Interface layer** ([`ResourceClient`] / [`ActorClient`]) - type-safe
//!    async access from anywhere.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Room { id: u32, name: String }
//!
//! #[derive(Debug)] struct RoomCreate { name: String }
//! #[derive(Debug)] struct RoomUpdate { name: Option<String> }
//! #[derive(Debug)] enum RoomAction {}
//! #[derive(Debug, thiserror::Error)] #[error("room error")] struct RoomError;
//!
//! #[async_trait]
//! impl ActorEntity for Room {
//!     type Id = u32;
//!     type Create = RoomCreate;
//!     type Update = RoomUpdate;
//!     type Action = RoomAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = RoomError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: RoomCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: RoomUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: RoomAction, _ctx: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Room>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(RoomCreate { name: "Villa 1".into() }).await.unwrap();
//!     let room = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(room.name, "Villa 1");
//! }
//! ```
//!
//! ## Identity guarantees
//!
//! The actor assigns ids from an internal counter and remembers every id it has
//! ever handed out, including ids of deleted records. A fresh `create` can never
//! collide with a historical id, and [`ResourceClient::insert`] (the
//! restore-from-persistence path) fails with [`FrameworkError::DuplicateId`] when
//! the supplied record reuses one.
//!
//! ## Context injection
//!
//! Dependencies are bound at `run()` time, not at construction. An actor whose
//! entity needs collaborators (a notifier, other clients) receives them as its
//! `Context`, which is handed to every hook. This late binding keeps actor
//! construction dependency-free and acyclic.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient<T>`, an in-memory stand-in that
//! implements the same request surface with scripted expectations, for testing
//! client wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
