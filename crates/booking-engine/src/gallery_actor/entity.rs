//! [`ActorEntity`] implementation for [`GalleryImage`].

use crate::gallery_actor::GalleryError;
use crate::model::{GalleryImage, GalleryImageCreate, GalleryImageId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

/// Gallery images have no custom actions.
#[derive(Debug)]
pub enum GalleryAction {}

#[async_trait]
impl ActorEntity for GalleryImage {
    type Id = GalleryImageId;
    type Create = GalleryImageCreate;
    type Update = ();
    type Action = GalleryAction;
    type ActionResult = ();
    type Context = ();
    type Error = GalleryError;

    fn id(&self) -> &GalleryImageId {
        &self.id
    }

    fn from_create_params(id: GalleryImageId, params: GalleryImageCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            image: params.image,
            caption: params.caption,
            uploaded_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: GalleryAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
