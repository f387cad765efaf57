//! # ActorClient Trait
//!
//! A common interface for resource-specific client wrappers, providing default
//! `get`, `list` and `restore` methods on top of the generic
//! [`ResourceClient`].

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// A domain client (e.g. a `RoomClient`) wraps a `ResourceClient<Room>`, adds
/// its own orchestration methods, and implements this trait to pick up the
/// shared read/restore surface with its own error type.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Room { id: u32 }
/// #[derive(Debug)] struct RoomCreate;
/// #[derive(Debug)] struct RoomUpdate;
/// #[derive(Debug)] enum RoomAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("room error: {0}")]
/// struct RoomError(String);
///
/// impl From<String> for RoomError {
///     fn from(s: String) -> Self { RoomError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Room {
///     type Id = u32;
///     type Create = RoomCreate;
///     type Update = RoomUpdate;
///     type Action = RoomAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = RoomError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: RoomCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: RoomUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, action: RoomAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// struct RoomClient {
///     inner: ResourceClient<Room>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Room> for RoomClient {
///     type Error = RoomError;
///
///     fn inner(&self) -> &ResourceClient<Room> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         RoomError(e.to_string())
///     }
/// }
///
/// async fn usage(client: RoomClient) {
///     // get() and list() are provided automatically.
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
///
/// Deletion is deliberately absent: destructive operations are always gated by
/// the domain client, so they stay explicit methods on the wrapper.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of all entities in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Re-admit a persisted record under its original id (restore path).
    #[tracing::instrument(skip(self, record))]
    async fn restore(&self, record: T) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().insert(record).await.map_err(Self::map_error)
    }
}
