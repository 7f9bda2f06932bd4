use crate::shared::error::NvdError;

/// CVSS version a severity band filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvssVersion {
    V2,
    V3,
}

impl CvssVersion {
    /// Severity bands the NVD API accepts for this version
    pub fn bands(self) -> &'static [&'static str] {
        match self {
            CvssVersion::V2 => &["LOW", "MEDIUM", "HIGH"],
            CvssVersion::V3 => &["LOW", "MEDIUM", "HIGH", "CRITICAL"],
        }
    }

    fn flag(self) -> &'static str {
        match self {
            CvssVersion::V2 => "--cvss-v2-severity",
            CvssVersion::V3 => "--cvss-v3-severity",
        }
    }

    /// Returns the upper-cased band, or an error naming the allowed values
    pub fn normalize_band(self, band: &str) -> Result<String, NvdError> {
        let upper = band.to_uppercase();
        if self.bands().contains(&upper.as_str()) {
            Ok(upper)
        } else {
            Err(NvdError::validation(format!(
                "{} must be {}",
                self.flag(),
                self.bands().join("|")
            )))
        }
    }
}
