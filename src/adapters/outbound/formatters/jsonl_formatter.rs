use crate::application::dto::SearchResponse;
use crate::ports::outbound::ResultFormatter;
use crate::shared::error::NvdError;
use crate::shared::Result;
use serde_json::Value;

/// List fields that can be streamed, with the key each entry is unwrapped from
const LIST_FIELDS: &[(&str, &str)] = &[
    ("vulnerabilities", "cve"),
    ("products", "cpe"),
    ("matchStrings", "matchString"),
];

/// JsonLinesFormatter adapter - one compact JSON line per record
///
/// Records are unwrapped from their wrapper object (`{"cve": {...}}` becomes
/// `{...}`) when the wrapper key is present.
pub struct JsonLinesFormatter;

impl JsonLinesFormatter {
    pub fn new() -> Self {
        Self
    }

    fn extract_records(document: &Value) -> Result<Vec<&Value>> {
        let root = document.as_object().ok_or_else(|| NvdError::Output {
            details: "jsonl output expects an object response".to_string(),
        })?;

        for (field, inner_key) in LIST_FIELDS {
            let Some(raw) = root.get(*field) else {
                continue;
            };
            let entries = raw.as_array().ok_or_else(|| NvdError::Output {
                details: format!("unexpected {} type", field),
            })?;
            return Ok(entries
                .iter()
                .map(|entry| entry.get(*inner_key).unwrap_or(entry))
                .collect());
        }

        Err(NvdError::Output {
            details: "jsonl output is only supported for list responses (vulnerabilities/products/matchStrings)".to_string(),
        }
        .into())
    }
}

impl Default for JsonLinesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonLinesFormatter {
    fn format(&self, response: &SearchResponse) -> Result<String> {
        let mut output = String::new();
        for record in Self::extract_records(&response.document)? {
            let line = serde_json::to_string(record).map_err(|e| NvdError::Output {
                details: e.to_string(),
            })?;
            output.push_str(&line);
            output.push('\n');
        }
        Ok(output)
    }
}
