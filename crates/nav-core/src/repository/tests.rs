//! Repository Integration Tests
//!
//! Tests for MemoryStore and CollectionService round trips.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use async_trait::async_trait;

    use crate::collection::{Collection, CollectionService};
    use crate::domain::{DomainError, DomainResult, ResourceItem};
    use crate::repository::{CollectionStore, MemoryStore, MY_COLLECTION_TABLE};

    /// Store whose writes fail for urls containing "fail"
    #[derive(Clone)]
    struct FlakyStore {
        inner: MemoryStore,
    }

    #[async_trait(?Send)]
    impl CollectionStore for FlakyStore {
        fn is_supported(&self) -> bool {
            true
        }

        fn table(&self) -> &str {
            self.inner.table()
        }

        async fn read_all(&self) -> DomainResult<Vec<ResourceItem>> {
            self.inner.read_all().await
        }

        async fn write(&self, item: &ResourceItem) -> DomainResult<()> {
            if item.url.contains("fail") {
                return Err(DomainError::Storage("quota exceeded".into()));
            }
            self.inner.write(item).await
        }

        async fn delete(&self, key: &str) -> DomainResult<()> {
            self.inner.delete(key).await
        }
    }

    fn github() -> ResourceItem {
        ResourceItem::new("GitHub", "https://github.com").with_description("Code hosting")
    }

    fn docs() -> ResourceItem {
        ResourceItem::new("Docs.rs", "https://docs.rs")
    }

    async fn seeded() -> CollectionService<MemoryStore> {
        let service = CollectionService::new(MemoryStore::new());
        service.add(github()).await.expect("Failed to add");
        service.add(docs()).await.expect("Failed to add");
        service
    }

    #[tokio::test]
    async fn test_memory_store_upserts_by_url() {
        let store = MemoryStore::new();
        assert_eq!(store.table(), MY_COLLECTION_TABLE);

        store.write(&github()).await.unwrap();
        store.write(&ResourceItem::new("Renamed", "https://github.com")).await.unwrap();

        let all = store.read_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_memory_store_delete_missing_key() {
        let store = MemoryStore::new();
        store.delete("https://nowhere.example").await.expect("Delete failed");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_returns_refreshed_items() {
        let service = CollectionService::new(MemoryStore::new());
        let items = service.add(github()).await.expect("Add failed");
        assert_eq!(items, vec![github()]);

        let items = service.add(docs()).await.expect("Add failed");
        assert_eq!(items.len(), 2);
        assert_eq!(service.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_item() {
        let store = MemoryStore::new();
        let service = CollectionService::new(store.clone());
        let result = service.add(ResourceItem::new("No scheme", "github.com")).await;
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_remove() {
        let service = seeded().await;
        let items = service.remove("https://github.com").await.expect("Remove failed");
        assert_eq!(items, vec![docs()]);
    }

    #[tokio::test]
    async fn test_unsupported_storage_aborts() {
        let store = MemoryStore::unsupported();
        let service = CollectionService::new(store.clone());
        assert_eq!(service.load().await, Err(DomainError::StorageUnsupported));
        assert_eq!(service.add(github()).await, Err(DomainError::StorageUnsupported));
        assert_eq!(service.remove("https://github.com").await, Err(DomainError::StorageUnsupported));
        assert!(matches!(
            service.import("[]").await,
            Err(DomainError::StorageUnsupported)
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_export_then_import_restores_collection() {
        let source = seeded().await;
        let exported = Collection::new(source.load().await.unwrap()).export().unwrap();

        let target = CollectionService::new(MemoryStore::new());
        let outcome = target.import(&exported).await.expect("Import failed");
        assert!(outcome.report.is_complete());
        assert_eq!(outcome.report.written, 2);

        let before: BTreeSet<_> = source.load().await.unwrap().into_iter().collect();
        let after: BTreeSet<_> = outcome.items.into_iter().collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_import_non_array_leaves_store_unchanged() {
        let service = seeded().await;
        let before = service.load().await.unwrap();

        let result = service.import(r#"{"a":1}"#).await;
        assert_eq!(result, Err(DomainError::NotAnArray("object")));

        let result = service.import("not json").await;
        assert!(matches!(result, Err(DomainError::MalformedImport(_))));

        assert_eq!(service.load().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_import_merges_with_existing_items() {
        let service = seeded().await;
        let outcome = service
            .import(r#"[{"name":"crates.io","url":"https://crates.io"},{"name":"GitHub 2","url":"https://github.com"}]"#)
            .await
            .unwrap();
        assert_eq!(outcome.report.written, 2);
        assert_eq!(outcome.items.len(), 3);
        let github = outcome.items.iter().find(|i| i.url == "https://github.com").unwrap();
        assert_eq!(github.name, "GitHub 2");
    }

    #[tokio::test]
    async fn test_import_reports_partial_failures() {
        let service = CollectionService::new(FlakyStore { inner: MemoryStore::new() });
        let text = r#"[
            {"name":"GitHub","url":"https://github.com"},
            {"name":"Broken","url":"https://fail.example"},
            {"name":"no url"}
        ]"#;
        let outcome = service.import(text).await.expect("Import settles");
        assert_eq!(outcome.report.written, 1);
        assert_eq!(outcome.report.failed, 1);
        assert_eq!(outcome.report.rejected, 1);
        assert!(!outcome.report.is_complete());
        assert_eq!(outcome.items, vec![ResourceItem::new("GitHub", "https://github.com")]);
    }
}
