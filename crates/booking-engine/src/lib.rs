//! # Resort Booking Engine
//!
//! An embeddable reservation engine for a small resort: guests register,
//! browse the room catalog, submit priced bookings with payment proof, and
//! follow their reservations through the pending/approved/declined lifecycle.
//! Admins curate the catalog and gallery, settle bookings and moderate
//! feedback.
//!
//! Every collection is owned by one actor task (see the `resource-actor`
//! crate), so writes serialise per collection without locks. The modules
//! layer as follows:
//!
//! - [`model`] - plain domain types and their invariants
//! - [`pricing`] - the pure stay-pricing function
//! - `*_actor` - one resource actor per collection
//! - [`clients`] - the authorization-aware API the embedder calls
//! - [`adapters`] - ports for notifications, blobs, persistence, credentials
//! - [`lifecycle`] - wiring, snapshot/restore, shutdown, logging setup

pub mod account_actor;
pub mod adapters;
pub mod booking_actor;
pub mod clients;
pub mod feedback_actor;
pub mod gallery_actor;
pub mod lifecycle;
pub mod model;
pub mod pricing;
pub mod room_actor;
