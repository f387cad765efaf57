//! Promotional gallery images shown on the resort's public pages.

use crate::model::BlobRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for gallery images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GalleryImageId(pub u32);

impl From<u32> for GalleryImageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for GalleryImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IMG{}", self.0)
    }
}

/// An admin-curated image in the public gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub image: BlobRef,
    pub caption: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Payload for adding an image to the gallery.
#[derive(Debug, Clone)]
pub struct GalleryImageCreate {
    pub image: BlobRef,
    pub caption: String,
}
