//! # Gallery Client
//!
//! Curation of the public gallery. Listing is open; adding and removing
//! images is admin only.

use crate::gallery_actor::GalleryError;
use crate::model::{Caller, GalleryImage, GalleryImageCreate, GalleryImageId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Gallery actor.
#[derive(Clone)]
pub struct GalleryClient {
    inner: ResourceClient<GalleryImage>,
}

impl GalleryClient {
    pub fn new(inner: ResourceClient<GalleryImage>) -> Self {
        Self { inner }
    }

    /// Adds an image to the gallery. Admin only.
    #[instrument(skip(self, params))]
    pub async fn add_image(
        &self,
        caller: &Caller,
        params: GalleryImageCreate,
    ) -> Result<GalleryImageId, GalleryError> {
        ensure_admin(caller)?;
        debug!("Adding gallery image");
        self.inner
            .create(params)
            .await
            .map_err(GalleryError::from_framework)
    }

    /// Removes an image from the gallery. Admin only.
    #[instrument(skip(self))]
    pub async fn remove_image(
        &self,
        caller: &Caller,
        id: GalleryImageId,
    ) -> Result<(), GalleryError> {
        ensure_admin(caller)?;
        debug!("Removing gallery image");
        self.inner
            .delete(id)
            .await
            .map_err(GalleryError::from_framework)
    }
}

fn ensure_admin(caller: &Caller) -> Result<(), GalleryError> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(GalleryError::NotAuthorized(caller.email.to_string()))
    }
}

#[async_trait]
impl ActorClient<GalleryImage> for GalleryClient {
    type Error = GalleryError;

    fn inner(&self) -> &ResourceClient<GalleryImage> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        GalleryError::from_framework(e)
    }
}
