//! # ActorEntity Trait
//!
//! The contract every resource (Room, Account, Booking, ...) must implement to
//! be managed by the generic [`ResourceActor`](crate::ResourceActor). Associated
//! types pin down the id, DTOs, actions, context and error of the resource, and
//! lifecycle hooks let the entity validate and react at each step.
//!
//! # Architecture Note
//! One trait, one generic actor: the `ResourceActor` logic is written once and
//! reused for every resource type. Associated types keep the API misuse-proof -
//! a `Booking` actor only accepts a `BookingCreate`, and the compiler rejects
//! anything else.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors or adapters. The
/// `Context` associated type carries those dependencies; it is supplied to
/// `run()` and injected into every async hook (late binding).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations beyond CRUD (e.g. `Approve`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity: one enum per actor, covering every
    /// operation. Clients then match on a single error type instead of one
    /// enum per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the entity's id. The actor relies on this for lookups in its
    /// insertion-ordered store and for duplicate detection on insert.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_admit` / `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called with the current contents of the store before this entity is
    /// admitted, for both `Create` and `Insert`. Implement it to enforce
    /// store-wide invariants (e.g. a unique e-mail per account). The default
    /// accepts everything.
    fn on_admit(&self, _peers: &[Self]) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and admitted. Use this
    /// hook for side effects that should fire exactly once per creation; it is
    /// *not* invoked on `Insert` (restoring persisted state must not replay
    /// creation effects).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
