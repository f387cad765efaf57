//! Durable storage for the engine's collections.

use crate::adapters::AdapterError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// The named collections the engine snapshots and restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Rooms,
    Accounts,
    Bookings,
    Feedback,
    GalleryConfig,
}

impl Collection {
    /// Stable storage name for the collection.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Rooms => "rooms",
            Collection::Accounts => "accounts",
            Collection::Bookings => "bookings",
            Collection::Feedback => "feedback",
            Collection::GalleryConfig => "gallery-config",
        }
    }
}

/// Loads and saves whole collections as JSON documents.
///
/// The engine serialises each record itself; adapters only move opaque JSON,
/// so swapping a file store for a database never touches domain code.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    async fn load(&self, collection: Collection) -> Result<Vec<serde_json::Value>, AdapterError>;

    async fn save(
        &self,
        collection: Collection,
        records: Vec<serde_json::Value>,
    ) -> Result<(), AdapterError>;
}

/// In-memory persistence, keyed by collection.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    collections: Mutex<HashMap<Collection, Vec<serde_json::Value>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryPersistence {
    async fn load(&self, collection: Collection) -> Result<Vec<serde_json::Value>, AdapterError> {
        let collections = self.collections.lock().unwrap();
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn save(
        &self,
        collection: Collection,
        records: Vec<serde_json::Value>,
    ) -> Result<(), AdapterError> {
        self.collections.lock().unwrap().insert(collection, records);
        Ok(())
    }
}
