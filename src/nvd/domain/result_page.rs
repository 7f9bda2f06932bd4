use crate::shared::error::NvdError;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    #[serde(default)]
    start_index: Option<i64>,
    #[serde(default)]
    results_per_page: Option<i64>,
    #[serde(default)]
    total_results: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// One decoded NVD API response
///
/// The paging metadata is typed; the result records stay opaque JSON since
/// their schema depends on the endpoint. Any other top-level field is kept
/// verbatim in `extra` so the document can be written back out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub start_index: Option<i64>,
    pub results_per_page: Option<i64>,
    pub total_results: Option<i64>,
    pub message: Option<String>,
    list_field: String,
    items: Option<Vec<Value>>,
    extra: Map<String, Value>,
}

impl ResultPage {
    /// Decodes a response body, pulling the records out of `list_field`
    pub fn from_json(body: &[u8], list_field: &str) -> Result<Self, NvdError> {
        let raw: RawPage = serde_json::from_slice(body).map_err(|e| NvdError::Decode {
            details: e.to_string(),
        })?;
        Self::from_raw(raw, list_field)
    }

    fn from_raw(mut raw: RawPage, list_field: &str) -> Result<Self, NvdError> {
        let items = match raw.rest.remove(list_field) {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                return Err(NvdError::Decode {
                    details: format!(
                        "expected '{}' to be an array, got {}",
                        list_field,
                        json_type_name(&other)
                    ),
                })
            }
        };

        Ok(Self {
            start_index: raw.start_index,
            results_per_page: raw.results_per_page,
            total_results: raw.total_results,
            message: raw.message,
            list_field: list_field.to_string(),
            items,
            extra: raw.rest,
        })
    }

    /// Non-empty `message`, which the API uses to refuse a query even on 2xx
    pub fn rejection_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn items(&self) -> &[Value] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items.unwrap_or_default()
    }

    /// Moves the records out, leaving the page without a list field
    pub fn take_items(&mut self) -> Vec<Value> {
        self.items.take().unwrap_or_default()
    }

    /// Replaces the records, keeping every other field of this page
    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.items = Some(items);
        self
    }

    /// Rebuilds the JSON document this page was decoded from
    pub fn into_document(self) -> Value {
        let mut doc = self.extra;
        if let Some(v) = self.start_index {
            doc.insert("startIndex".to_string(), Value::from(v));
        }
        if let Some(v) = self.results_per_page {
            doc.insert("resultsPerPage".to_string(), Value::from(v));
        }
        if let Some(v) = self.total_results {
            doc.insert("totalResults".to_string(), Value::from(v));
        }
        if let Some(message) = self.message {
            doc.insert("message".to_string(), Value::String(message));
        }
        if let Some(items) = self.items {
            doc.insert(self.list_field, Value::Array(items));
        }
        Value::Object(doc)
    }
}

/// The single logical result of a possibly multi-page search
///
/// Metadata comes from the first page only; the records are the
/// concatenation of every fetched page, truncated to the wanted count.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedResult {
    page: ResultPage,
    pages_fetched: usize,
}

impl MergedResult {
    pub fn new(page: ResultPage, pages_fetched: usize) -> Self {
        Self {
            page,
            pages_fetched,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn items(&self) -> &[Value] {
        self.page.items()
    }

    pub fn into_document(self) -> Value {
        self.page.into_document()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
