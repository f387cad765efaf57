//! High-level, authorization-aware clients.
//!
//! Each client wraps the generic [`ResourceClient`](resource_actor::ResourceClient)
//! for one actor and adds the orchestration the raw channel does not know
//! about: who may call what, cross-actor lookups (a booking resolving its room
//! snapshot), filtering and ordering. The presentation layer talks only to
//! these clients, never to the actors directly.

pub mod account_client;
pub mod booking_client;
pub mod feedback_client;
pub mod gallery_client;
pub mod room_client;

pub use account_client::{AccountClient, RegistrationRequest};
pub use booking_client::{BookingClient, BookingRequest};
pub use feedback_client::FeedbackClient;
pub use gallery_client::GalleryClient;
pub use room_client::RoomClient;
