use crate::nvd::domain::SearchTarget;
use crate::nvd::policies::FlagEncodingPolicy;
use std::collections::BTreeMap;

/// Query-string parameters sent to the NVD API
///
/// Each name appears at most once. Iteration and encoding follow ascending
/// name order, so the same query always yields the same URL.
///
/// `resultsPerPage` and `startIndex` belong to the paging layer and are only
/// written through [`WireParameters::set_page`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireParameters {
    params: BTreeMap<String, String>,
}

impl WireParameters {
    pub const RESULTS_PER_PAGE: &'static str = "resultsPerPage";
    pub const START_INDEX: &'static str = "startIndex";

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter parameter, replacing any previous value
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        debug_assert!(
            !Self::is_control(name),
            "{} is owned by the paging layer",
            name
        );
        self.params.insert(name.to_string(), value.into());
    }

    /// Sets a boolean filter using the encoding `target` expects for it
    pub fn insert_flag(&mut self, target: SearchTarget, name: &str) {
        if let Some(encoding) = FlagEncodingPolicy::encoding_for(target, name) {
            self.insert(name, encoding.value());
        }
    }

    /// Writes the paging control parameters
    pub fn set_page(&mut self, start_index: Option<u64>, results_per_page: u64) {
        if let Some(start) = start_index {
            self.params
                .insert(Self::START_INDEX.to_string(), start.to_string());
        }
        self.params.insert(
            Self::RESULTS_PER_PAGE.to_string(),
            results_per_page.to_string(),
        );
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encodes the parameters as `name=value` pairs joined by `&`
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn is_control(name: &str) -> bool {
        name == Self::RESULTS_PER_PAGE || name == Self::START_INDEX
    }
}
