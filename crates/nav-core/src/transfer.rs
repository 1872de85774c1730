//! Import/Export Codecs
//!
//! Export writes the collection as pretty JSON. Import validates an uploaded
//! document into a typed batch before anything touches the store.

use serde_json::Value;

use crate::domain::{DomainError, DomainResult, ResourceItem};

/// Fixed download filename of an export
pub const EXPORT_FILE_NAME: &str = "我的收藏.json";

/// MIME type of an export
pub const EXPORT_MIME_TYPE: &str = "application/json;charset=utf-8";

/// Serialize the collection for download.
///
/// The collection is wrapped as `[items]`, pretty-printed with two-space
/// indent, then the wrapper's leading `"[\n"` and trailing `"]"` are cut.
/// What remains is the item array indented one level plus a newline.
pub fn export_collection(items: &[ResourceItem]) -> DomainResult<String> {
    let wrapped = serde_json::to_string_pretty(&[items])
        .map_err(|e| DomainError::Serialization(e.to_string()))?;
    wrapped
        .strip_prefix("[\n")
        .and_then(|inner| inner.strip_suffix(']'))
        .map(str::to_string)
        .ok_or_else(|| DomainError::Serialization("unexpected export wrapper".into()))
}

/// Items of an import file that passed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub items: Vec<ResourceItem>,
    /// Elements that are not valid link items
    pub rejected: usize,
}

/// Per-item outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub written: usize,
    pub rejected: usize,
    /// Valid items whose store write failed
    pub failed: usize,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.written + self.rejected + self.failed
    }

    /// Every element of the file ended up in the store
    pub fn is_complete(&self) -> bool {
        self.rejected == 0 && self.failed == 0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse and validate an import document.
///
/// The top level must be a JSON array. A single nested array (the
/// array-of-one-array wrapper) is unwrapped. Elements that do not
/// deserialize into a valid `ResourceItem` are counted as rejected.
pub fn parse_import(text: &str) -> DomainResult<ImportBatch> {
    let text = text.trim_start_matches('\u{feff}');
    let value: Value =
        serde_json::from_str(text).map_err(|e| DomainError::MalformedImport(e.to_string()))?;

    let mut elements = match value {
        Value::Array(elements) => elements,
        other => return Err(DomainError::NotAnArray(json_kind(&other))),
    };
    if elements.len() == 1 && elements[0].is_array() {
        if let Some(Value::Array(inner)) = elements.pop() {
            elements = inner;
        }
    }

    let mut batch = ImportBatch::default();
    for element in elements {
        match serde_json::from_value::<ResourceItem>(element) {
            Ok(item) => {
                let item = item.normalized();
                match item.validate() {
                    Ok(()) => batch.items.push(item),
                    Err(e) => {
                        log::debug!("rejecting import element '{}': {}", item.name, e);
                        batch.rejected += 1;
                    }
                }
            }
            Err(e) => {
                log::debug!("rejecting import element: {}", e);
                batch.rejected += 1;
            }
        }
    }
    Ok(batch)
}
