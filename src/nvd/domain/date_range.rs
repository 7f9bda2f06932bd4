use crate::nvd::domain::WireParameters;
use crate::shared::error::NvdError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};

/// Local timestamp layout accepted in addition to RFC 3339, read as UTC
const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a date given as RFC 3339 or as `YYYY-MM-DD HH:MM`
///
/// RFC 3339 input must use an upper-case `T` separator and an upper-case `Z`
/// or a numeric offset.
pub fn parse_nvd_date(value: &str) -> Result<DateTime<FixedOffset>, NvdError> {
    if is_strict_rfc3339(value) {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(dt);
        }
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, LOCAL_TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc().fixed_offset());
    }
    Err(NvdError::InvalidDate {
        value: value.to_string(),
    })
}

// chrono also accepts a space or lower-case `t`/`z`, which the API does not
fn is_strict_rfc3339(value: &str) -> bool {
    value.as_bytes().get(10) == Some(&b'T') && !value.ends_with('z')
}

/// Formats a date the way the NVD API expects it (RFC 3339, whole seconds)
pub fn format_nvd_date(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A start/end pair of date filters that must be given together
#[derive(Debug, Clone, Copy)]
pub struct DateRange<'a> {
    start: Option<&'a str>,
    end: Option<&'a str>,
    start_flag: &'static str,
    end_flag: &'static str,
}

impl<'a> DateRange<'a> {
    pub fn new(
        start: Option<&'a str>,
        end: Option<&'a str>,
        start_flag: &'static str,
        end_flag: &'static str,
    ) -> Self {
        Self {
            start: start.filter(|s| !s.is_empty()),
            end: end.filter(|s| !s.is_empty()),
            start_flag,
            end_flag,
        }
    }

    /// Fails if exactly one bound is given
    pub fn check_paired(&self) -> Result<(), NvdError> {
        if self.start.is_some() != self.end.is_some() {
            return Err(NvdError::validation(format!(
                "{} and {} must be used together",
                self.start_flag, self.end_flag
            )));
        }
        Ok(())
    }

    /// Fails on the first bound that is not a valid date
    pub fn check_parseable(&self) -> Result<(), NvdError> {
        self.parse().map(|_| ())
    }

    /// Writes both bounds re-serialized as RFC 3339
    pub fn write_params(
        &self,
        params: &mut WireParameters,
        start_name: &str,
        end_name: &str,
    ) -> Result<(), NvdError> {
        if let Some((start, end)) = self.parse()? {
            params.insert(start_name, format_nvd_date(&start));
            params.insert(end_name, format_nvd_date(&end));
        }
        Ok(())
    }

    #[allow(clippy::type_complexity)]
    fn parse(&self) -> Result<Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>, NvdError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(Some((parse_nvd_date(start)?, parse_nvd_date(end)?))),
            (Some(start), None) => parse_nvd_date(start).map(|_| None),
            _ => Ok(None),
        }
    }
}
