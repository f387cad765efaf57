//! # Room Client
//!
//! Catalog management on top of the Room actor. Reads are open to everyone;
//! every mutation is admin-gated.

use crate::model::{Caller, Room, RoomCreate, RoomId, RoomUpdate};
use crate::room_actor::RoomError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Room actor.
#[derive(Clone)]
pub struct RoomClient {
    inner: ResourceClient<Room>,
}

impl RoomClient {
    pub fn new(inner: ResourceClient<Room>) -> Self {
        Self { inner }
    }

    /// Adds a room to the catalog. Admin only.
    #[instrument(skip(self, params))]
    pub async fn add_room(&self, caller: &Caller, params: RoomCreate) -> Result<RoomId, RoomError> {
        ensure_admin(caller)?;
        debug!("Adding room to catalog");
        self.inner
            .create(params)
            .await
            .map_err(RoomError::from_framework)
    }

    /// Edits a room's details. Admin only; existing bookings keep their
    /// snapshot and are unaffected.
    #[instrument(skip(self, update))]
    pub async fn update_room(
        &self,
        caller: &Caller,
        id: RoomId,
        update: RoomUpdate,
    ) -> Result<Room, RoomError> {
        ensure_admin(caller)?;
        debug!("Updating room");
        self.inner
            .update(id, update)
            .await
            .map_err(RoomError::from_framework)
    }

    /// Removes a room from the catalog. Admin only. The id is retired, never
    /// reissued, and bookings that referenced the room keep their snapshot.
    #[instrument(skip(self))]
    pub async fn remove_room(&self, caller: &Caller, id: RoomId) -> Result<(), RoomError> {
        ensure_admin(caller)?;
        debug!("Removing room");
        self.inner
            .delete(id)
            .await
            .map_err(RoomError::from_framework)
    }
}

fn ensure_admin(caller: &Caller) -> Result<(), RoomError> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(RoomError::NotAuthorized(caller.email.to_string()))
    }
}

#[async_trait]
impl ActorClient<Room> for RoomClient {
    type Error = RoomError;

    fn inner(&self) -> &ResourceClient<Room> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RoomError::from_framework(e)
    }
}
