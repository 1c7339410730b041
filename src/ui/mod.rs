//! User interface module - console output for the prerelease tool.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_usage, display_workflow_result,
    format_workflow_result, usage_text,
};
