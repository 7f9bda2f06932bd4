use crate::application::dto::SearchResponse;
use crate::ports::outbound::ResultFormatter;
use crate::shared::error::NvdError;
use crate::shared::Result;

/// JsonFormatter adapter - writes the merged document as one JSON value
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, response: &SearchResponse) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&response.document)
        } else {
            serde_json::to_string(&response.document)
        }
        .map_err(|e| NvdError::Output {
            details: e.to_string(),
        })?;

        Ok(format!("{}\n", rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nvd::domain::SearchTarget;
    use serde_json::json;

    fn response() -> SearchResponse {
        SearchResponse {
            target: SearchTarget::Cves,
            document: json!({"totalResults": 1, "vulnerabilities": [{"cve": {"id": "CVE-2024-0001"}}]}),
            record_count: 1,
            pages_fetched: 1,
        }
    }

    #[test]
    fn test_compact_output() {
        let output = JsonFormatter::new(false).format(&response()).unwrap();
        assert_eq!(
            output,
            "{\"totalResults\":1,\"vulnerabilities\":[{\"cve\":{\"id\":\"CVE-2024-0001\"}}]}\n"
        );
    }

    #[test]
    fn test_pretty_output() {
        let output = JsonFormatter::new(true).format(&response()).unwrap();
        assert!(output.starts_with("{\n  \"totalResults\": 1,"));
        assert!(output.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, response().document);
    }
}
