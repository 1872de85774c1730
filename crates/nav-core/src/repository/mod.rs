//! Repository Layer
//!
//! Storage abstraction for the user's collection and an in-memory backend.

mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use traits::{CollectionStore, MY_COLLECTION_TABLE};
