use crate::nvd::domain::paginated_search::{
    check_keyword_exact, check_limit, limit_as_count, non_empty,
};
use crate::nvd::domain::{CvssVersion, DateRange, PaginatedSearch, SearchTarget, WireParameters};
use crate::shared::error::NvdError;

/// Vulnerability search against the NVD `/cves/2.0` endpoint
///
/// Empty strings are treated the same as unset filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CveSearchQuery {
    pub cpe_name: Option<String>,
    pub cve_id: Option<String>,
    pub cvss_v2_severity: Option<String>,
    pub cvss_v3_severity: Option<String>,
    pub is_vulnerable: bool,
    pub keyword_exact_match: bool,
    pub keyword_search: Option<String>,
    pub no_rejected: bool,
    pub pub_start_date: Option<String>,
    pub pub_end_date: Option<String>,
    pub last_mod_start_date: Option<String>,
    pub last_mod_end_date: Option<String>,
    pub limit: i64,
}

impl CveSearchQuery {
    /// Query matching a single CVE identifier, one default page
    pub fn by_id(cve_id: impl Into<String>) -> Self {
        Self {
            cve_id: Some(cve_id.into()),
            ..Self::default()
        }
    }

    fn published(&self) -> DateRange<'_> {
        DateRange::new(
            self.pub_start_date.as_deref(),
            self.pub_end_date.as_deref(),
            "--pub-start",
            "--pub-end",
        )
    }

    fn last_modified(&self) -> DateRange<'_> {
        DateRange::new(
            self.last_mod_start_date.as_deref(),
            self.last_mod_end_date.as_deref(),
            "--mod-start",
            "--mod-end",
        )
    }
}

impl PaginatedSearch for CveSearchQuery {
    fn target(&self) -> SearchTarget {
        SearchTarget::Cves
    }

    fn validate(&self) -> Result<(), NvdError> {
        check_keyword_exact(self.keyword_exact_match, &self.keyword_search)?;
        if self.is_vulnerable && non_empty(&self.cpe_name).is_none() {
            return Err(NvdError::validation("--is-vulnerable requires --cpe-name"));
        }
        self.published().check_paired()?;
        self.last_modified().check_paired()?;
        check_limit(self.limit)?;
        if let Some(band) = non_empty(&self.cvss_v2_severity) {
            CvssVersion::V2.normalize_band(band)?;
        }
        if let Some(band) = non_empty(&self.cvss_v3_severity) {
            CvssVersion::V3.normalize_band(band)?;
        }
        self.published().check_parseable()?;
        self.last_modified().check_parseable()?;
        Ok(())
    }

    fn to_params(&self) -> Result<WireParameters, NvdError> {
        let target = self.target();
        let mut params = WireParameters::new();

        if let Some(cpe_name) = non_empty(&self.cpe_name) {
            params.insert("cpeName", cpe_name);
        }
        if let Some(cve_id) = non_empty(&self.cve_id) {
            params.insert("cveId", cve_id);
        }
        if let Some(keyword) = non_empty(&self.keyword_search) {
            params.insert("keywordSearch", keyword);
        }
        if self.keyword_exact_match {
            params.insert_flag(target, "keywordExactMatch");
        }
        if let Some(band) = non_empty(&self.cvss_v2_severity) {
            params.insert("cvssV2Severity", CvssVersion::V2.normalize_band(band)?);
        }
        if let Some(band) = non_empty(&self.cvss_v3_severity) {
            params.insert("cvssV3Severity", CvssVersion::V3.normalize_band(band)?);
        }
        if self.is_vulnerable {
            params.insert_flag(target, "isVulnerable");
        }
        if self.no_rejected {
            params.insert_flag(target, "noRejected");
        }

        self.published()
            .write_params(&mut params, "pubStartDate", "pubEndDate")?;
        self.last_modified()
            .write_params(&mut params, "lastModStartDate", "lastModEndDate")?;

        Ok(params)
    }

    fn limit(&self) -> u64 {
        limit_as_count(self.limit)
    }
}
