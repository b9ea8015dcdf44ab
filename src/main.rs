use anyhow::{Context, Result};
use clap::Parser;

use release_jobs::boundary::BoundaryWarning;
use release_jobs::cli::{run_job, Job, JobArgs, JobOutcome};
use release_jobs::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-jobs",
    version,
    about = "Check and print changelog sections for release tags"
)]
struct Args {
    #[arg(help = "The job to run: check-changelog or print-changelog")]
    run: String,

    #[arg(long, help = "The Git tag to work with, e.g. v1.2.3")]
    tag: Option<String>,

    #[arg(long, help = "Changelog file to read [default: CHANGELOG.md]")]
    changelog: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print status messages to stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Unknown jobs never touch the config or the changelog
    if Job::from_name(&args.run).is_none() {
        if args.verbose {
            ui::display_boundary_warning(&BoundaryWarning::UnknownJob { name: args.run });
        }
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let job_args = JobArgs {
        run: args.run,
        tag: args.tag,
        changelog: args.changelog,
    };

    if args.verbose {
        let path = job_args
            .changelog
            .as_deref()
            .unwrap_or(&config.changelog.path);
        ui::display_status(&format!("Running {} against {}", job_args.run, path));
    }

    let report = run_job(&job_args, &config)?;

    for warning in &report.warnings {
        // Unknown jobs are a silent no-op unless asked for details
        if matches!(warning, BoundaryWarning::UnknownJob { .. }) && !args.verbose {
            continue;
        }
        ui::display_boundary_warning(warning);
    }

    match report.outcome {
        JobOutcome::Skipped { .. } => {}
        JobOutcome::Checked { tag, key } => {
            if args.verbose {
                ui::display_success(&format!("Changelog mentions {} for tag {}", key, tag));
            }
        }
        JobOutcome::Printed { notes, .. } => ui::display_notes(&notes),
    }

    Ok(())
}
