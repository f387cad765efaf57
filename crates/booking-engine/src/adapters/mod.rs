//! Ports to the embedder's infrastructure.
//!
//! The engine stays host-agnostic by pushing every outward-facing concern
//! behind a small trait: status notifications ([`NotificationAdapter`]),
//! binary uploads ([`BlobUploadAdapter`]), durable state
//! ([`PersistenceAdapter`]) and credential comparison ([`CredentialVerifier`]).
//! In-memory implementations of each ship alongside for tests and for
//! embedders that need nothing fancier.

pub mod blob;
pub mod credentials;
pub mod notification;
pub mod persistence;

pub use blob::{BlobUploadAdapter, MemoryBlobStore};
pub use credentials::{CredentialVerifier, DirectVerifier};
pub use notification::{LoggingNotifier, NotificationAdapter, RecordingNotifier};
pub use persistence::{Collection, MemoryPersistence, PersistenceAdapter};

use thiserror::Error;

/// Errors surfaced by adapter implementations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The backing store failed to read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A notification could not be delivered.
    #[error("Delivery error: {0}")]
    Delivery(String),
}
