use crate::nvd::domain::paginated_search::{
    check_keyword_exact, check_limit, limit_as_count, non_empty,
};
use crate::nvd::domain::{DateRange, PaginatedSearch, SearchTarget, WireParameters};
use crate::shared::error::NvdError;

/// Platform (CPE dictionary) search against the NVD `/cpes/2.0` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpeSearchQuery {
    pub cpe_name_id: Option<String>,
    /// Partial CPE name; the API matches it as a prefix
    pub cpe_match_string: Option<String>,
    pub keyword_exact_match: bool,
    pub keyword_search: Option<String>,
    pub last_mod_start_date: Option<String>,
    pub last_mod_end_date: Option<String>,
    pub match_criteria_id: Option<String>,
    pub limit: i64,
}

impl CpeSearchQuery {
    fn last_modified(&self) -> DateRange<'_> {
        DateRange::new(
            self.last_mod_start_date.as_deref(),
            self.last_mod_end_date.as_deref(),
            "--mod-start",
            "--mod-end",
        )
    }
}

impl PaginatedSearch for CpeSearchQuery {
    fn target(&self) -> SearchTarget {
        SearchTarget::Cpes
    }

    fn validate(&self) -> Result<(), NvdError> {
        check_keyword_exact(self.keyword_exact_match, &self.keyword_search)?;
        self.last_modified().check_paired()?;
        check_limit(self.limit)?;
        self.last_modified().check_parseable()?;
        Ok(())
    }

    fn to_params(&self) -> Result<WireParameters, NvdError> {
        let mut params = WireParameters::new();

        if let Some(id) = non_empty(&self.cpe_name_id) {
            params.insert("cpeNameId", id);
        }
        if let Some(match_string) = non_empty(&self.cpe_match_string) {
            params.insert("cpeMatchString", match_string);
        }
        if let Some(keyword) = non_empty(&self.keyword_search) {
            params.insert("keywordSearch", keyword);
        }
        if self.keyword_exact_match {
            params.insert_flag(self.target(), "keywordExactMatch");
        }
        self.last_modified()
            .write_params(&mut params, "lastModStartDate", "lastModEndDate")?;
        if let Some(id) = non_empty(&self.match_criteria_id) {
            params.insert("matchCriteriaId", id);
        }

        Ok(params)
    }

    fn limit(&self) -> u64 {
        limit_as_count(self.limit)
    }
}
