use crate::nvd::domain::{SearchTarget, WireParameters};
use crate::shared::error::NvdError;

/// Capability shared by the typed NVD searches
///
/// A search knows which endpoint it targets, how to check its own filter
/// combination, how to turn itself into query parameters, and how many
/// records the caller asked for.
pub trait PaginatedSearch {
    fn target(&self) -> SearchTarget;

    /// Checks the filters in a fixed order and returns the first violation
    fn validate(&self) -> Result<(), NvdError>;

    /// Serializes populated filters; assumes `validate` already passed
    ///
    /// Never sets `resultsPerPage` or `startIndex`.
    fn to_params(&self) -> Result<WireParameters, NvdError>;

    /// Requested total record count; 0 means one default page
    fn limit(&self) -> u64;
}

/// Treats `Some("")` like `None`
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub(crate) fn check_keyword_exact(
    keyword_exact_match: bool,
    keyword: &Option<String>,
) -> Result<(), NvdError> {
    if keyword_exact_match && non_empty(keyword).is_none() {
        return Err(NvdError::validation("--keyword-exact requires --keyword"));
    }
    Ok(())
}

pub(crate) fn check_limit(limit: i64) -> Result<(), NvdError> {
    if limit != 0 && limit < 1 {
        return Err(NvdError::validation("--limit must be >= 1"));
    }
    Ok(())
}

pub(crate) fn limit_as_count(limit: i64) -> u64 {
    u64::try_from(limit).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }

    #[test]
    fn test_check_limit() {
        assert!(check_limit(0).is_ok());
        assert!(check_limit(1).is_ok());
        assert!(check_limit(4500).is_ok());
        assert_eq!(
            check_limit(-3).unwrap_err().to_string(),
            "--limit must be >= 1"
        );
    }

    #[test]
    fn test_limit_as_count() {
        assert_eq!(limit_as_count(0), 0);
        assert_eq!(limit_as_count(2500), 2500);
        assert_eq!(limit_as_count(-1), 0);
    }
}
