//! Collection State and Service
//!
//! `Collection` is the in-memory mirror of the store. `CollectionService`
//! is the only path that mutates the store; every mutation returns the
//! freshly re-read contents so the mirror never goes stale.

use futures::future::join_all;

use crate::domain::{DomainError, DomainResult, Resource, ResourceItem};
use crate::repository::CollectionStore;
use crate::search;
use crate::transfer::{self, ImportReport};

/// In-memory mirror of the user's saved items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<ResourceItem>,
}

impl Collection {
    pub fn new(items: Vec<ResourceItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with this url is saved
    pub fn contains(&self, url: &str) -> bool {
        self.items.iter().any(|item| item.key() == url)
    }

    /// The synthetic "my collection" category, narrowed to the items
    /// matching a local search query
    pub fn filtered_resource(&self, query: &str) -> Resource {
        Resource::my_collection(search::filter_items(&self.items, query))
    }

    /// Serialize for download
    pub fn export(&self) -> DomainResult<String> {
        transfer::export_collection(&self.items)
    }
}

/// Result of an import: the per-item report plus the refreshed contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub report: ImportReport,
    pub items: Vec<ResourceItem>,
}

/// Controller for all collection store mutations
#[derive(Debug, Clone, Copy)]
pub struct CollectionService<S> {
    store: S,
}

impl<S: CollectionStore> CollectionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn ensure_supported(&self) -> DomainResult<()> {
        if self.store.is_supported() {
            Ok(())
        } else {
            log::warn!("storage for table '{}' is not supported", self.store.table());
            Err(DomainError::StorageUnsupported)
        }
    }

    /// Hydrate: read every saved item
    pub async fn load(&self) -> DomainResult<Vec<ResourceItem>> {
        self.ensure_supported()?;
        let items = self.store.read_all().await?;
        log::debug!("loaded {} items from '{}'", items.len(), self.store.table());
        Ok(items)
    }

    /// Validate and save one item
    pub async fn add(&self, item: ResourceItem) -> DomainResult<Vec<ResourceItem>> {
        self.ensure_supported()?;
        let item = item.normalized();
        item.validate()?;
        self.store.write(&item).await?;
        log::info!("saved '{}' ({})", item.name, item.url);
        self.store.read_all().await
    }

    /// Remove the item stored under `url`
    pub async fn remove(&self, url: &str) -> DomainResult<Vec<ResourceItem>> {
        self.ensure_supported()?;
        self.store.delete(url).await?;
        log::info!("removed {}", url);
        self.store.read_all().await
    }

    /// Import an uploaded document.
    ///
    /// The document is validated first; a rejected document leaves the store
    /// untouched. Valid items are written concurrently and a failed write
    /// only counts against the report.
    pub async fn import(&self, text: &str) -> DomainResult<ImportOutcome> {
        self.ensure_supported()?;
        let batch = transfer::parse_import(text)?;

        let results = join_all(batch.items.iter().map(|item| self.store.write(item))).await;
        let mut report = ImportReport {
            rejected: batch.rejected,
            ..ImportReport::default()
        };
        for (item, result) in batch.items.iter().zip(results) {
            match result {
                Ok(()) => report.written += 1,
                Err(e) => {
                    log::warn!("import write failed for {}: {}", item.url, e);
                    report.failed += 1;
                }
            }
        }
        log::info!(
            "import settled: {} written, {} rejected, {} failed",
            report.written,
            report.rejected,
            report.failed
        );

        let items = self.store.read_all().await?;
        Ok(ImportOutcome { report, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_queries() {
        let collection = Collection::new(vec![
            ResourceItem::new("GitHub", "https://github.com"),
            ResourceItem::new("Docs.rs", "https://docs.rs").with_description("Rust docs"),
        ]);
        assert_eq!(collection.len(), 2);
        assert!(collection.contains("https://docs.rs"));
        assert!(!collection.contains("https://crates.io"));

        let panel = collection.filtered_resource("RUST");
        assert_eq!(panel.name, crate::domain::MY_COLLECTION_LABEL);
        assert_eq!(panel.site.len(), 1);
        assert_eq!(panel.site[0].name, "Docs.rs");

        assert_eq!(collection.filtered_resource(" ").site.len(), 2);
        assert!(collection.filtered_resource("docs ").is_empty());
    }

    #[test]
    fn test_empty_collection_exports() {
        let collection = Collection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.export().unwrap(), "  []\n");
    }
}
