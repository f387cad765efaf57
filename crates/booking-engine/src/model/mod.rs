//! Domain types for the resort booking engine.
//!
//! Every entity here is an [`ActorEntity`](resource_actor::ActorEntity) managed
//! by its own resource actor; the `*Create` / `*Update` structs are the DTOs
//! those actors accept. Field invariants (normalised e-mails, validated
//! ratings, strictly ordered stay dates) are enforced at construction, never
//! by convention.

pub mod account;
pub mod booking;
pub mod feedback;
pub mod gallery;
pub mod room;

pub use account::{
    Account, AccountCreate, AccountId, AccountUpdate, Caller, Credential, EmailAddress, Role,
};
pub use booking::{
    Booking, BookingCreate, BookingId, BookingStatus, PaymentDetails,
};
pub use feedback::{Feedback, FeedbackCreate, FeedbackId, Rating};
pub use gallery::{GalleryImage, GalleryImageCreate, GalleryImageId};
pub use room::{Room, RoomCategory, RoomCreate, RoomId, RoomSnapshot, RoomUpdate, StayType};

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque reference to uploaded binary content (a receipt image, a room
/// photo), as returned by the blob-upload adapter. The engine never looks
/// inside it; it only requires payment proofs to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobRef(String);

impl BlobRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for BlobRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
