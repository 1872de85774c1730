//! Resource Entities
//!
//! A `ResourceItem` is one external link. A `Resource` groups items into a
//! named category, shown as one panel.

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{DomainError, DomainResult};

/// Label of the synthetic category wrapping the user's saved items
pub const MY_COLLECTION_LABEL: &str = "我的";

/// One external link entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Storage key of the item
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ResourceItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            url: url.into(),
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Primary key used by the collection store
    pub fn key(&self) -> &str {
        &self.url
    }

    /// Icon to display: the explicit image, else the site's favicon
    pub fn icon_url(&self) -> String {
        match &self.image {
            Some(image) => image.clone(),
            None => format!("{}/favicon.ico", self.url.trim_end_matches('/')),
        }
    }

    /// Trim text fields and drop blank optional ones
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            description: non_blank(self.description),
            url: self.url.trim().to_string(),
            image: non_blank(self.image),
        }
    }

    /// Name must be non-blank and url an absolute http(s) URL
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".into()));
        }
        let parsed = Url::parse(self.url.trim())
            .map_err(|e| DomainError::InvalidInput(format!("invalid url '{}': {}", self.url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DomainError::InvalidInput(format!(
                "unsupported url scheme '{}'",
                other
            ))),
        }
    }
}

/// A named category of link items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub site: Vec<ResourceItem>,
    #[serde(default)]
    pub icon: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, site: Vec<ResourceItem>) -> Self {
        Self {
            name: name.into(),
            site,
            icon: String::new(),
        }
    }

    /// The synthetic "my collection" category
    pub fn my_collection(items: Vec<ResourceItem>) -> Self {
        Self::new(MY_COLLECTION_LABEL, items)
    }

    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }
}
