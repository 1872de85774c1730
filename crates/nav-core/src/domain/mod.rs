//! Domain Layer
//!
//! Link entities and the shared error type.

mod error;
mod resource;

pub use error::{DomainError, DomainResult};
pub use resource::{Resource, ResourceItem, MY_COLLECTION_LABEL};
