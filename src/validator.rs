//! Cross-checks the manifest version against the source file's declarations

use crate::artifact::source::{
    find_major_minor, find_version_patch, major_minor_pattern, version_template_pattern, Lookup,
};
use crate::artifact::{ManifestDocument, SourceDocument};
use crate::config::SourceConfig;
use crate::domain::{parse_manifest_version, VersionTriple};
use crate::error::{PrereleaseError, Result};

fn require_found(lookup: Lookup, source: &SourceDocument, pattern: String) -> Result<String> {
    match lookup {
        Lookup::Found(value) => Ok(value),
        Lookup::NotFound => Err(PrereleaseError::pattern_not_found(
            source.display_path(),
            pattern,
            "declaration is absent",
        )),
        Lookup::Malformed(value) => Err(PrereleaseError::pattern_not_found(
            source.display_path(),
            pattern,
            format!("unexpected value '{}'", value),
        )),
    }
}

/// Verify that the manifest and the source file record the same version.
///
/// Checks run in order and the first failure is returned: manifest version
/// shape, major-minor declaration presence, major-minor equality, version
/// template presence, patch equality.
///
/// # Returns
/// * `Ok(VersionTriple)` - The version both artifacts agree on
/// * `Err(MalformedVersion | PatternNotFound | VersionSkew)`
pub fn validate_consistency(
    manifest: &ManifestDocument,
    source: &SourceDocument,
    names: &SourceConfig,
) -> Result<VersionTriple> {
    let triple = parse_manifest_version(manifest.version())?;

    let major_minor = require_found(
        find_major_minor(&source.text, names),
        source,
        major_minor_pattern(names),
    )?;
    if major_minor != triple.major_minor {
        return Err(PrereleaseError::VersionSkew {
            component: names.major_minor_constant.clone(),
            path: source.display_path(),
            source_value: major_minor,
            manifest_value: triple.major_minor,
        });
    }

    let patch = require_found(
        find_version_patch(&source.text, names),
        source,
        version_template_pattern(names),
    )?;
    if patch != triple.patch {
        return Err(PrereleaseError::VersionSkew {
            component: "patch".to_string(),
            path: source.display_path(),
            source_value: patch,
            manifest_value: triple.patch,
        });
    }

    Ok(triple)
}
