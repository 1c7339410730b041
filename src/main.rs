use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use configure_prerelease::cli::{run_prerelease_workflow, PrereleaseWorkflowArgs};
use configure_prerelease::config;
use configure_prerelease::domain::SystemClock;
use configure_prerelease::ui;

#[derive(clap::Parser)]
#[command(
    name = "configure-prerelease",
    about = "Stamp a package manifest and its version source file with a dated prerelease version"
)]
struct Args {
    #[arg(help = "Release channel: dev or insiders")]
    channel: Option<String>,

    #[arg(help = "Path to the package.json manifest")]
    manifest: Option<PathBuf>,

    #[arg(help = "Path to the source file declaring the version constants")]
    source: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the new version without writing any file")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("configure-prerelease {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Too few arguments is not an error: show usage and leave files alone
    let (Some(channel), Some(manifest_path), Some(source_path)) =
        (args.channel, args.manifest, args.source)
    else {
        ui::display_usage("configure-prerelease");
        return Ok(());
    };

    let config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;

    let workflow_args = PrereleaseWorkflowArgs {
        channel,
        manifest_path,
        source_path,
        dry_run: args.dry_run,
    };

    if workflow_args.dry_run {
        ui::display_status("Dry run: no files will be written");
    }

    let result = run_prerelease_workflow(&workflow_args, &config, &SystemClock)?;
    ui::display_workflow_result(&result);

    Ok(())
}
