use crate::nvd::domain::SearchTarget;

/// How a boolean filter is written to the query string when it is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEncoding {
    /// Parameter name with an empty value (`noRejected=`)
    Presence,
    /// Parameter name with the literal value `true`
    LiteralTrue,
}

impl FlagEncoding {
    pub fn value(self) -> &'static str {
        match self {
            FlagEncoding::Presence => "",
            FlagEncoding::LiteralTrue => "true",
        }
    }
}

/// FlagEncodingPolicy maps each boolean filter of an endpoint to its encoding
///
/// The NVD API is not uniform here: the CVE endpoint takes `keywordExactMatch`
/// and `noRejected` as bare names but `isVulnerable` as `true`, while the CPE
/// endpoint takes `keywordExactMatch=true`. Each flag is looked up by name
/// instead of going through a single boolean serializer.
pub struct FlagEncodingPolicy;

impl FlagEncodingPolicy {
    const CVE_FLAGS: &'static [(&'static str, FlagEncoding)] = &[
        ("keywordExactMatch", FlagEncoding::Presence),
        ("isVulnerable", FlagEncoding::LiteralTrue),
        ("noRejected", FlagEncoding::Presence),
    ];

    const CPE_FLAGS: &'static [(&'static str, FlagEncoding)] =
        &[("keywordExactMatch", FlagEncoding::LiteralTrue)];

    /// Returns the encoding of `flag` on `target`, or None if the endpoint has no such flag
    pub fn encoding_for(target: SearchTarget, flag: &str) -> Option<FlagEncoding> {
        let table = match target {
            SearchTarget::Cves => Self::CVE_FLAGS,
            SearchTarget::Cpes => Self::CPE_FLAGS,
        };
        table
            .iter()
            .find(|(name, _)| *name == flag)
            .map(|(_, encoding)| *encoding)
    }
}
