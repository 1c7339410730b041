use crate::error::{PrereleaseError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `major.minor.patch` followed by end of string or a pre-release delimiter.
/// ASCII digits only.
static MANIFEST_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+\.[0-9]+)\.([0-9]+)(?:$|-)").expect("manifest version regex is valid")
});

/// Version components shared by the manifest and the source file.
///
/// Both fields are digit tokens compared textually; no numeric meaning is
/// attached to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    /// The `M.N` prefix, e.g. "4.2"
    pub major_minor: String,
    /// The patch digits, e.g. "0"
    pub patch: String,
}

impl VersionTriple {
    pub fn new(major_minor: impl Into<String>, patch: impl Into<String>) -> Self {
        VersionTriple {
            major_minor: major_minor.into(),
            patch: patch.into(),
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major_minor, self.patch)
    }
}

/// Parse the manifest's version string (e.g. "4.2.0" or "4.2.0-dev.20240305")
///
/// Takes the first `major.minor.patch` run that is followed by either the end
/// of the string or a pre-release delimiter `-`.
///
/// # Returns
/// * `Ok(VersionTriple)` - `{ major_minor: "M.N", patch: "P" }`
/// * `Err(MalformedVersion)` - If no such run exists
pub fn parse_manifest_version(version: &str) -> Result<VersionTriple> {
    let captures = MANIFEST_VERSION_REGEX
        .captures(version)
        .ok_or_else(|| PrereleaseError::malformed_version(version))?;

    Ok(VersionTriple::new(&captures[1], &captures[2]))
}
