//! Main workflow orchestration logic
//!
//! Runs the prerelease configuration end to end: channel parsing, loading both
//! artifacts, the consistency check, identifier composition, both rewrites and
//! finally the writes. Nothing touches disk until every in-memory step has
//! succeeded.

use std::path::PathBuf;

use crate::artifact::{self, rewrite_source, ManifestDocument, SourceDocument};
use crate::config::Config;
use crate::domain::{Channel, Clock, PrereleaseIdentifier};
use crate::error::Result;
use crate::validator::validate_consistency;

/// Arguments for the prerelease workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PrereleaseWorkflowArgs {
    /// Raw channel name, validated by the workflow
    pub channel: String,

    /// Path to the JSON manifest (package.json)
    pub manifest_path: PathBuf,

    /// Path to the source file declaring the version constants
    pub source_path: PathBuf,

    /// Preview mode - compute everything but write nothing
    pub dry_run: bool,
}

/// Result of a successful prerelease workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub channel: Channel,

    /// Manifest version before the run
    pub previous_version: String,

    /// Manifest version after the run, e.g. "4.2.0-dev.20240305"
    pub new_version: String,

    pub manifest_path: PathBuf,

    pub source_path: PathBuf,

    /// Whether both files were written (false for dry runs)
    pub written: bool,
}

/// Main prerelease workflow
///
/// 1. Parse channel
/// 2. Load manifest and source file
/// 3. Validate that both record the same version
/// 4. Compose the prerelease identifier from `clock`
/// 5. Rewrite source (rejecting a no-op) and manifest in memory
/// 6. Write manifest, then source
///
/// # Returns
///
/// Result describing the new version, or the first error encountered
pub fn run_prerelease_workflow(
    args: &PrereleaseWorkflowArgs,
    config: &Config,
    clock: &dyn Clock,
) -> Result<WorkflowResult> {
    let channel = Channel::parse(&args.channel)?;

    let manifest = ManifestDocument::load(&args.manifest_path)?;
    let source = SourceDocument::load(&args.source_path)?;

    let triple = validate_consistency(&manifest, &source, &config.source)?;
    let identifier = PrereleaseIdentifier::compose(channel, &triple.patch, clock);

    let source_text = rewrite_source(&source, &config.source, &identifier)?;
    let new_version = identifier.full_version(&triple.major_minor);
    let manifest_json = manifest.with_version(new_version.clone()).to_json_string()?;

    if !args.dry_run {
        artifact::persist(&args.manifest_path, &manifest_json)?;
        artifact::persist(&args.source_path, &source_text)?;
    }

    Ok(WorkflowResult {
        channel,
        previous_version: manifest.version().to_string(),
        new_version,
        manifest_path: args.manifest_path.clone(),
        source_path: args.source_path.clone(),
        written: !args.dry_run,
    })
}
