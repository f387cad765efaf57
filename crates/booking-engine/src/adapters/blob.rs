//! Binary content uploads (payment receipts, room and gallery photos).

use crate::adapters::AdapterError;
use crate::model::BlobRef;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Stores an uploaded binary and returns the opaque reference the engine keeps.
#[async_trait]
pub trait BlobUploadAdapter: Send + Sync {
    async fn upload(&self, bytes: &[u8], label: &str) -> Result<BlobRef, AdapterError>;
}

/// In-memory blob store issuing `mem://` references.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    counter: AtomicU64,
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches previously uploaded content, for assertions in tests.
    pub fn fetch(&self, reference: &BlobRef) -> Option<Vec<u8>> {
        self.blobs.lock().unwrap().get(reference.as_str()).cloned()
    }
}

#[async_trait]
impl BlobUploadAdapter for MemoryBlobStore {
    async fn upload(&self, bytes: &[u8], label: &str) -> Result<BlobRef, AdapterError> {
        let seq = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let reference = format!("mem://{seq}/{label}");
        self.blobs
            .lock()
            .unwrap()
            .insert(reference.clone(), bytes.to_vec());
        Ok(BlobRef::new(reference))
    }
}
