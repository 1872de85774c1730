//! Nav-Page Core
//!
//! Layered like the UI expects:
//! - domain: link entities and errors
//! - repository: storage abstraction for the user's collection
//! - collection: in-memory mirror and the mutation service
//! - search, transfer, catalog: filtering, import/export, static data

pub mod catalog;
pub mod collection;
pub mod domain;
pub mod repository;
pub mod search;
pub mod transfer;

pub use catalog::{builtin_catalog, builtin_site, Site};
pub use collection::{Collection, CollectionService, ImportOutcome};
pub use domain::{DomainError, DomainResult, Resource, ResourceItem, MY_COLLECTION_LABEL};
pub use repository::{CollectionStore, MemoryStore, MY_COLLECTION_TABLE};
pub use search::SearchEngine;
pub use transfer::{ImportBatch, ImportReport, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
