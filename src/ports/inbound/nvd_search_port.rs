use crate::application::dto::SearchResponse;
use crate::nvd::domain::{CpeSearchQuery, CveSearchQuery};
use crate::shared::Result;

/// NvdSearchPort - Inbound port for the NVD search use cases
///
/// This port defines the interface that driving adapters (the CLI, or any
/// library caller) use to run searches. Every call blocks until all pages are
/// fetched and merged.
pub trait NvdSearchPort {
    /// Fetches a single CVE by identifier (e.g. `CVE-2021-26855`)
    ///
    /// # Errors
    /// Returns a validation error if `cve_id` is empty, otherwise any error
    /// raised by the page request
    fn get_cve(&self, cve_id: &str) -> Result<SearchResponse>;

    /// Runs a vulnerability search, paging as needed to reach `query.limit`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The query fails validation (no request is sent)
    /// - Any page request fails or the API rejects the query
    fn search_cves(&self, query: &CveSearchQuery) -> Result<SearchResponse>;

    /// Runs a platform (CPE) search, paging as needed to reach `query.limit`
    ///
    /// # Errors
    /// Same conditions as [`NvdSearchPort::search_cves`]
    fn search_cpes(&self, query: &CpeSearchQuery) -> Result<SearchResponse>;
}
