//! Static Catalog
//!
//! Site metadata and link categories compiled into the binary.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, Resource};

const SITE_JSON: &str = include_str!("../data/site.json");
const RESOURCE_JSON: &str = include_str!("../data/resource.json");

/// Page metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

pub fn load_site(json: &str) -> DomainResult<Site> {
    serde_json::from_str(json).map_err(|e| DomainError::Serialization(format!("site: {}", e)))
}

/// Parse a catalog document, filling missing item images with favicons
pub fn load_catalog(json: &str) -> DomainResult<Vec<Resource>> {
    let mut resources: Vec<Resource> = serde_json::from_str(json)
        .map_err(|e| DomainError::Serialization(format!("catalog: {}", e)))?;
    if let Some(unnamed) = resources.iter().position(|r| r.name.trim().is_empty()) {
        return Err(DomainError::InvalidInput(format!(
            "catalog category #{} has no name",
            unnamed
        )));
    }
    fill_default_images(&mut resources);
    Ok(resources)
}

fn fill_default_images(resources: &mut [Resource]) {
    for item in resources.iter_mut().flat_map(|r| r.site.iter_mut()) {
        if item.image.is_none() {
            item.image = Some(item.icon_url());
        }
    }
}

/// Compiled-in site metadata; falls back to defaults if the data is broken
pub fn builtin_site() -> Site {
    load_site(SITE_JSON).unwrap_or_else(|e| {
        log::error!("builtin site metadata unreadable: {}", e);
        Site::default()
    })
}

/// Compiled-in catalog; empty if the data is broken
pub fn builtin_catalog() -> Vec<Resource> {
    load_catalog(RESOURCE_JSON).unwrap_or_else(|e| {
        log::error!("builtin catalog unreadable: {}", e);
        Vec::new()
    })
}
