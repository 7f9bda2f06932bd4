/// The NVD API v2 endpoint a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTarget {
    /// `/cves/2.0` - vulnerability search
    Cves,
    /// `/cpes/2.0` - platform search
    Cpes,
}

impl SearchTarget {
    const CVE_ENDPOINT: &'static str = "https://services.nvd.nist.gov/rest/json/cves/2.0";
    const CPE_ENDPOINT: &'static str = "https://services.nvd.nist.gov/rest/json/cpes/2.0";

    pub fn endpoint(self) -> &'static str {
        match self {
            SearchTarget::Cves => Self::CVE_ENDPOINT,
            SearchTarget::Cpes => Self::CPE_ENDPOINT,
        }
    }

    /// Name of the list-typed field holding the result records
    pub fn list_field(self) -> &'static str {
        match self {
            SearchTarget::Cves => "vulnerabilities",
            SearchTarget::Cpes => "products",
        }
    }
}

impl std::fmt::Display for SearchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchTarget::Cves => write!(f, "CVE"),
            SearchTarget::Cpes => write!(f, "CPE"),
        }
    }
}
