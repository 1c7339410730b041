//! Pure formatting functions for UI output.
//!
//! Messages are built by `format_*` functions so they can be tested without
//! capturing stdout; `display_*` functions print them.

use console::style;

use crate::cli::WorkflowResult;

/// Usage text printed when fewer than three positional arguments are given
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage:\n\t{} <dev|insiders> <package.json location> <file containing version>\n",
        program
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_usage(program: &str) {
    print!("{}", usage_text(program));
}

/// Summary lines for a finished workflow, without styling
pub fn format_workflow_result(result: &WorkflowResult) -> Vec<String> {
    let verb = if result.written { "Updated" } else { "Would update" };
    vec![
        format!(
            "{} {}: {} -> {}",
            verb,
            result.manifest_path.display(),
            result.previous_version,
            result.new_version
        ),
        format!(
            "{} {} for channel '{}'",
            verb,
            result.source_path.display(),
            result.channel
        ),
    ]
}

/// Display the outcome of a prerelease run.
///
/// Dry runs are reported as status lines, real runs as successes.
pub fn display_workflow_result(result: &WorkflowResult) {
    for line in format_workflow_result(result) {
        if result.written {
            display_success(&line);
        } else {
            display_status(&line);
        }
    }
}
