//! Repository Layer - Core Traits
//!
//! Defines the abstract interface over the collection table.
//! Implementations can use IndexedDB, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, ResourceItem};

/// Name of the table holding the user's saved items
pub const MY_COLLECTION_TABLE: &str = "myCollection";

/// Key-based access to one named table of `ResourceItem` records
///
/// Records are keyed by `ResourceItem::key` (the url). Browser handles are
/// not `Send`, so futures are not required to be either.
#[async_trait(?Send)]
pub trait CollectionStore {
    /// Whether the backing storage exists in this environment.
    /// Must be checked before calling any other method.
    fn is_supported(&self) -> bool;

    /// Name of the table this store operates on
    fn table(&self) -> &str;

    /// Read every record in the table
    async fn read_all(&self) -> DomainResult<Vec<ResourceItem>>;

    /// Insert or replace the record with the item's key
    async fn write(&self, item: &ResourceItem) -> DomainResult<()>;

    /// Delete the record with `key`; deleting a missing key succeeds
    async fn delete(&self, key: &str) -> DomainResult<()>;
}
