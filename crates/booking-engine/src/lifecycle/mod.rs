//! System lifecycle: wiring, persistence and shutdown.
//!
//! [`ResortSystem`] owns every actor task and hands out the domain clients.
//! The embedder builds one at startup, optionally restores persisted state,
//! serves requests through the clients, snapshots on the way out and calls
//! [`ResortSystem::shutdown`].

pub mod resort_system;
pub mod tracing;

pub use resort_system::{ResortSystem, SystemError};
pub use tracing::setup_tracing;
