//! # Generic Messages
//!
//! The message types exchanged between [`ResourceClient`](crate::ResourceClient)
//! and [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Each variant maps to one lifecycle operation on the resource collection:
///
/// - **Create**: build a new entity from [`ActorEntity::Create`] under a fresh,
///   actor-assigned id.
/// - **Insert**: admit a fully-built record under its existing id - the
///   restore-from-persistence path. Fails with
///   [`FrameworkError::DuplicateId`](crate::FrameworkError::DuplicateId) if the
///   id was ever issued before, deleted or not.
/// - **Get**: fetch the current state of one record.
/// - **List**: fetch a snapshot of the whole collection in insertion order.
/// - **Update**: mutate one record through [`ActorEntity::Update`].
/// - **Delete**: remove one record permanently; its id stays retired.
/// - **Action**: run a custom [`ActorEntity::Action`] against one record.
///
/// The enum is generic over `T: ActorEntity`, so a payload for one resource
/// type can never be routed to another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Insert {
        record: T,
        respond_to: Response<()>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
