//! Search/Filter Engine
//!
//! Local mode filters link lists by case-insensitive substring on name or
//! description. External mode builds a search-engine URL for the query.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::domain::{Resource, ResourceItem};

/// Bytes left unescaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// External search provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Bing,
    Google,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 2] = [SearchEngine::Bing, SearchEngine::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
            SearchEngine::Google => "google",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "bing" => Some(SearchEngine::Bing),
            "google" => Some(SearchEngine::Google),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "Bing",
            SearchEngine::Google => "Google",
        }
    }

    fn endpoint(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::Google => "https://www.google.com/search?q=",
        }
    }

    /// URL for an external search, or `None` when the query is blank.
    /// The query is encoded as typed, surrounding whitespace included.
    pub fn search_url(&self, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }
        Some(format!("{}{}", self.endpoint(), encode_query(query)))
    }
}

/// Percent-encode a query the way `encodeURIComponent` does
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, URI_COMPONENT).to_string()
}

/// Lower-cased query; `None` when it is empty or only whitespace
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// `needle` must already be normalized
fn matches_normalized(item: &ResourceItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

/// Keep the items matching `query`; a blank query keeps everything
pub fn filter_items(items: &[ResourceItem], query: &str) -> Vec<ResourceItem> {
    let Some(needle) = normalize_query(query) else {
        return items.to_vec();
    };
    items
        .iter()
        .filter(|item| matches_normalized(item, &needle))
        .cloned()
        .collect()
}

/// Filter every category, dropping the ones left without items.
/// A blank query returns the input unchanged.
pub fn filter_resources(resources: &[Resource], query: &str) -> Vec<Resource> {
    let Some(needle) = normalize_query(query) else {
        return resources.to_vec();
    };
    resources
        .iter()
        .filter_map(|res| {
            let site: Vec<ResourceItem> = res
                .site
                .iter()
                .filter(|item| matches_normalized(item, &needle))
                .cloned()
                .collect();
            if site.is_empty() {
                None
            } else {
                Some(Resource {
                    name: res.name.clone(),
                    site,
                    icon: res.icon.clone(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Resource> {
        vec![
            Resource::new(
                "Dev",
                vec![
                    ResourceItem::new("GitHub", "https://github.com"),
                    ResourceItem::new("Stack Overflow", "https://stackoverflow.com")
                        .with_description("Q&A for programmers"),
                ],
            ),
            Resource::new(
                "Design",
                vec![ResourceItem::new("Dribbble", "https://dribbble.com")
                    .with_description("Design inspiration")],
            ),
            Resource::new("Empty", vec![]),
        ]
    }

    #[test]
    fn test_filter_keeps_matching_category_only() {
        let catalog = vec![Resource::new(
            "Dev",
            vec![ResourceItem::new("GitHub", "https://github.com")],
        )];
        let filtered = filter_resources(&catalog, "git");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Dev");
        assert_eq!(filtered[0].site, vec![ResourceItem::new("GitHub", "https://github.com")]);
    }

    #[test]
    fn test_filter_drops_categories_without_matches() {
        let filtered = filter_resources(&catalog(), "GIT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].site.len(), 1);
        assert_eq!(filtered[0].site[0].name, "GitHub");
    }

    #[test]
    fn test_filter_matches_description() {
        let filtered = filter_resources(&catalog(), "inspiration");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Design");
    }

    #[test]
    fn test_filter_results_all_contain_query() {
        let catalog = catalog();
        for query in ["o", "PRO", "design", "xyz", "git ", " for", "Q&A "] {
            let needle = query.to_lowercase();
            for res in filter_resources(&catalog, query) {
                assert!(!res.site.is_empty());
                for item in &res.site {
                    let desc = item.description.clone().unwrap_or_default().to_lowercase();
                    assert!(item.name.to_lowercase().contains(&needle) || desc.contains(&needle));
                }
            }
        }
    }

    #[test]
    fn test_empty_query_returns_input_unchanged() {
        let catalog = catalog();
        assert_eq!(filter_resources(&catalog, ""), catalog);
        assert_eq!(filter_resources(&catalog, "   "), catalog);
    }

    #[test]
    fn test_filter_items() {
        let items = catalog()[0].site.clone();
        assert_eq!(filter_items(&items, "stack").len(), 1);
        assert_eq!(filter_items(&items, "").len(), 2);
        assert!(filter_items(&items, "nothing here").is_empty());
        assert_eq!(filter_items(&items, "q&a").len(), 1);
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_query() {
        let catalog = vec![Resource::new(
            "Dev",
            vec![ResourceItem::new("GitHub", "https://github.com")],
        )];
        assert!(filter_resources(&catalog, "git ").is_empty());
        assert!(filter_resources(&catalog, " git").is_empty());

        let items = vec![ResourceItem::new("Rust Book", "https://doc.rust-lang.org/book")];
        assert_eq!(filter_items(&items, "rust ").len(), 1);
        assert!(filter_items(&items, "book ").is_empty());
    }

    #[test]
    fn test_search_url_encodes_query_as_typed() {
        assert_eq!(
            SearchEngine::Google.search_url(" cats ").as_deref(),
            Some("https://www.google.com/search?q=%20cats%20")
        );
    }

    #[test]
    fn test_search_urls() {
        assert_eq!(
            SearchEngine::Google.search_url("cats").as_deref(),
            Some("https://www.google.com/search?q=cats")
        );
        assert_eq!(
            SearchEngine::Bing.search_url("rust lang").as_deref(),
            Some("https://www.bing.com/search?q=rust%20lang")
        );
    }

    #[test]
    fn test_whitespace_query_has_no_search_url() {
        for engine in SearchEngine::ALL {
            assert_eq!(engine.search_url("   "), None);
            assert_eq!(engine.search_url(""), None);
        }
    }

    #[test]
    fn test_encode_query_like_uri_component() {
        assert_eq!(encode_query("c++ & rust"), "c%2B%2B%20%26%20rust");
        assert_eq!(encode_query("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_query("猫"), "%E7%8C%AB");
        assert_eq!(encode_query("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    }

    #[test]
    fn test_engine_parse() {
        assert_eq!(SearchEngine::parse("google"), Some(SearchEngine::Google));
        assert_eq!(SearchEngine::parse("bing"), Some(SearchEngine::Bing));
        assert_eq!(SearchEngine::parse("yahoo"), None);
        assert_eq!(SearchEngine::default(), SearchEngine::Bing);
    }
}
