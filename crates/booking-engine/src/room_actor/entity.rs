//! [`ActorEntity`] implementation for [`Room`].

use crate::model::{Room, RoomCreate, RoomId, RoomUpdate};
use crate::room_actor::RoomError;
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Rooms have no custom actions.
#[derive(Debug)]
pub enum RoomAction {}

#[async_trait]
impl ActorEntity for Room {
    type Id = RoomId;
    type Create = RoomCreate;
    type Update = RoomUpdate;
    type Action = RoomAction;
    type ActionResult = ();
    type Context = ();
    type Error = RoomError;

    fn id(&self) -> &RoomId {
        &self.id
    }

    fn from_create_params(id: RoomId, params: RoomCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            base_price: params.base_price,
            category: params.category,
            description: params.description,
            amenities: params.amenities,
            image: params.image,
        })
    }

    /// Applies the provided fields; the category is never updatable.
    async fn on_update(&mut self, update: RoomUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(base_price) = update.base_price {
            self.base_price = base_price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(amenities) = update.amenities {
            self.amenities = amenities;
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RoomAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
