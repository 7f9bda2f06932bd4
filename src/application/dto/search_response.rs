use crate::nvd::domain::{MergedResult, SearchTarget};
use serde_json::Value;

/// SearchResponse - result of one search use case execution
///
/// `document` is shaped like a single raw NVD page; only its list field
/// differs when several pages were merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub target: SearchTarget,
    pub document: Value,
    pub record_count: usize,
    pub pages_fetched: usize,
}

impl SearchResponse {
    pub fn new(target: SearchTarget, merged: MergedResult) -> Self {
        let record_count = merged.items().len();
        let pages_fetched = merged.pages_fetched();
        Self {
            target,
            document: merged.into_document(),
            record_count,
            pages_fetched,
        }
    }

    /// Records of the merged list field, empty when the field is absent
    pub fn records(&self) -> &[Value] {
        self.document
            .get(self.target.list_field())
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
