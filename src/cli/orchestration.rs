//! Job dispatch logic
//!
//! Maps the `run` name from the command line onto a [`Job`], runs it against
//! the configured changelog and hands the outcome back to `main`, which is
//! the only place that prints results or decides the exit status.

use crate::boundary::{self, BoundaryWarning};
use crate::changelog::Changelog;
use crate::config::Config;
use crate::domain::ReleaseTag;
use crate::error::{JobsError, Result};

/// The named operations that can be selected with `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Verify the release tag has a changelog section
    CheckChangelog,
    /// Print the notes of the release tag's changelog section
    PrintChangelog,
}

impl Job {
    /// Look up a job by its command-line name
    pub fn from_name(name: &str) -> Option<Job> {
        match name {
            "check-changelog" => Some(Job::CheckChangelog),
            "print-changelog" => Some(Job::PrintChangelog),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Job::CheckChangelog => "check-changelog",
            Job::PrintChangelog => "print-changelog",
        }
    }
}

/// Arguments for a job run
///
/// Mirrors the CLI Args but in a format suitable for dispatch logic.
/// This decoupling allows jobs to be run programmatically without clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobArgs {
    /// Job name as given on the command line
    pub run: String,

    /// Release tag to work with
    pub tag: Option<String>,

    /// Changelog path overriding the configured one
    pub changelog: Option<String>,
}

/// What a job produced
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// Unknown job name, nothing ran
    Skipped { name: String },

    /// The release section key was found
    Checked { tag: String, key: String },

    /// Extracted release notes, empty when no heading matched
    Printed { tag: String, notes: String },
}

/// Result of a successful job run
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    pub outcome: JobOutcome,

    /// Non-fatal issues found while running
    pub warnings: Vec<BoundaryWarning>,
}

/// Runs the job named in `args`.
///
/// Each run reads the changelog fresh from disk. An unknown job name is not
/// an error: the report carries [`JobOutcome::Skipped`].
///
/// # Returns
/// * `Ok(JobReport)` - Job outcome plus any warnings
/// * `Err` - Missing or malformed tag, missing section, unreadable changelog
pub fn run_job(args: &JobArgs, config: &Config) -> Result<JobReport> {
    let Some(job) = Job::from_name(&args.run) else {
        return Ok(JobReport {
            outcome: JobOutcome::Skipped {
                name: args.run.clone(),
            },
            warnings: vec![BoundaryWarning::UnknownJob {
                name: args.run.clone(),
            }],
        });
    };

    let tag = args
        .tag
        .as_deref()
        .map(ReleaseTag::new)
        .ok_or_else(|| JobsError::missing_tag(job.name()))?;
    let mut warnings = boundary::inspect_tag(&tag);

    let path = args
        .changelog
        .as_deref()
        .unwrap_or(&config.changelog.path);
    let changelog = Changelog::read(path)?;

    let outcome = match job {
        Job::CheckChangelog => {
            changelog.check(&tag)?;
            JobOutcome::Checked {
                tag: tag.name.clone(),
                key: tag.section_key()?.to_string(),
            }
        }
        Job::PrintChangelog => {
            let key = tag.section_key()?;
            let notes = match changelog.section(&key, &config.changelog.unreleased_label) {
                Some(notes) => notes,
                None => {
                    warnings.push(BoundaryWarning::SectionNotFound {
                        heading: key.heading(),
                        file: changelog.file_name(),
                    });
                    String::new()
                }
            };
            JobOutcome::Printed {
                tag: tag.name.clone(),
                notes,
            }
        }
    };

    Ok(JobReport { outcome, warnings })
}
