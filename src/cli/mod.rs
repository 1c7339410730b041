//! Command-line entry points

pub mod orchestration;

pub use orchestration::{run_prerelease_workflow, PrereleaseWorkflowArgs, WorkflowResult};
