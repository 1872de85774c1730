//! In-memory Collection Store
//!
//! Ordered by key, like an IndexedDB object store cursor.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{CollectionStore, MY_COLLECTION_TABLE};
use crate::domain::{DomainError, DomainResult, ResourceItem};

/// Collection store backed by a shared map; clones see the same table
#[derive(Debug, Clone)]
pub struct MemoryStore {
    table: String,
    records: Arc<Mutex<BTreeMap<String, ResourceItem>>>,
    supported: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_table(MY_COLLECTION_TABLE)
    }

    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            records: Arc::new(Mutex::new(BTreeMap::new())),
            supported: true,
        }
    }

    /// A store that reports the capability as missing
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_records<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, ResourceItem>) -> T,
    ) -> DomainResult<T> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| DomainError::Storage(format!("table '{}' poisoned: {}", self.table, e)))?;
        Ok(f(&mut records))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CollectionStore for MemoryStore {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn table(&self) -> &str {
        &self.table
    }

    async fn read_all(&self) -> DomainResult<Vec<ResourceItem>> {
        self.with_records(|records| records.values().cloned().collect())
    }

    async fn write(&self, item: &ResourceItem) -> DomainResult<()> {
        self.with_records(|records| {
            records.insert(item.key().to_string(), item.clone());
        })
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.with_records(|records| {
            records.remove(key);
        })
    }
}
