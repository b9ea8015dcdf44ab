use release_jobs::boundary::BoundaryWarning;
use release_jobs::cli::{run_job, Job, JobArgs, JobOutcome};
use release_jobs::config::Config;
use release_jobs::JobsError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CHANGELOG: &str = "# Changelog

## [Unreleased]
- Work in progress

## [1.2.3] - 2024-03-01
Line A
Line B
## [1.2.2] - 2024-02-01
- Older fix
## [1.2.1]
- Oldest
";

fn changelog_dir(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), content).unwrap();
    dir
}

fn args(run: &str, tag: Option<&str>, dir: &Path) -> JobArgs {
    JobArgs {
        run: run.to_string(),
        tag: tag.map(str::to_string),
        changelog: Some(dir.join("CHANGELOG.md").to_string_lossy().into_owned()),
    }
}

fn printed_notes(dir: &Path, tag: &str) -> String {
    let report = run_job(&args("print-changelog", Some(tag), dir), &Config::default()).unwrap();
    match report.outcome {
        JobOutcome::Printed { notes, .. } => notes,
        other => panic!("expected printed notes, got {:?}", other),
    }
}

#[test]
fn test_check_changelog_succeeds() {
    let dir = changelog_dir(CHANGELOG);
    let report = run_job(
        &args("check-changelog", Some("v1.2.3"), dir.path()),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        report.outcome,
        JobOutcome::Checked {
            tag: "v1.2.3".to_string(),
            key: "[1.2.3]".to_string(),
        }
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn test_check_changelog_missing_section() {
    let dir = changelog_dir(CHANGELOG);
    let err = run_job(
        &args("check-changelog", Some("v2.0.0"), dir.path()),
        &Config::default(),
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(matches!(err, JobsError::MissingSection { .. }));
    assert!(msg.contains("v2.0.0"), "got: {}", msg);
    assert!(msg.contains("[2.0.0]"), "got: {}", msg);
    assert!(msg.contains("CHANGELOG.md"), "got: {}", msg);
}

#[test]
fn test_check_changelog_matches_any_substring() {
    let dir = changelog_dir("Compare [0.4.0] with the previous release.\n");
    let result = run_job(
        &args("check-changelog", Some("v0.4.0"), dir.path()),
        &Config::default(),
    );
    assert!(result.is_ok());
}

#[test]
fn test_print_changelog_section() {
    let dir = changelog_dir(CHANGELOG);
    assert_eq!(printed_notes(dir.path(), "v1.2.3"), "Line A\nLine B\n");
}

#[test]
fn test_print_changelog_stops_at_next_heading() {
    let dir = changelog_dir(CHANGELOG);
    assert_eq!(printed_notes(dir.path(), "v1.2.2"), "- Older fix\n");
}

#[test]
fn test_print_changelog_unknown_version_is_empty() {
    let dir = changelog_dir(CHANGELOG);
    let report = run_job(
        &args("print-changelog", Some("v9.9.9"), dir.path()),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        report.outcome,
        JobOutcome::Printed {
            tag: "v9.9.9".to_string(),
            notes: String::new(),
        }
    );
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::SectionNotFound { heading, .. } if heading == "## [9.9.9]")));
}

#[test]
fn test_print_changelog_ignores_unreleased() {
    let dir = changelog_dir(CHANGELOG);
    assert_eq!(printed_notes(dir.path(), "vUnreleased"), "");
}

#[test]
fn test_print_changelog_uses_configured_unreleased_label() {
    let dir = changelog_dir("## [Next]\n- pending\n## [1.0.0]\n- done\n");
    let mut config = Config::default();
    config.changelog.unreleased_label = "Next".to_string();

    let report = run_job(&args("print-changelog", Some("vNext"), dir.path()), &config).unwrap();
    assert!(matches!(
        report.outcome,
        JobOutcome::Printed { ref notes, .. } if notes.is_empty()
    ));
}

#[test]
fn test_changelog_path_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("HISTORY.md");
    fs::write(&path, "## [3.0.0]\n- big\n").unwrap();

    let mut config = Config::default();
    config.changelog.path = path.to_string_lossy().into_owned();
    let job_args = JobArgs {
        run: "print-changelog".to_string(),
        tag: Some("v3.0.0".to_string()),
        changelog: None,
    };

    let report = run_job(&job_args, &config).unwrap();
    assert!(matches!(
        report.outcome,
        JobOutcome::Printed { ref notes, .. } if notes == "- big\n"
    ));
}

#[test]
fn test_jobs_are_idempotent() {
    let dir = changelog_dir(CHANGELOG);
    let config = Config::default();

    for run in [Job::CheckChangelog.name(), Job::PrintChangelog.name()] {
        let first = run_job(&args(run, Some("v1.2.3"), dir.path()), &config).unwrap();
        let second = run_job(&args(run, Some("v1.2.3"), dir.path()), &config).unwrap();
        assert_eq!(first, second);
    }
    assert_eq!(fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(), CHANGELOG);
}

#[test]
fn test_unknown_job_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    // No changelog on disk: an executed job would fail with an I/O error
    let report = run_job(&args("publish", Some("v1.0.0"), dir.path()), &Config::default()).unwrap();

    assert_eq!(
        report.outcome,
        JobOutcome::Skipped {
            name: "publish".to_string()
        }
    );
}

#[test]
fn test_missing_changelog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_job(
        &args("print-changelog", Some("v1.0.0"), dir.path()),
        &Config::default(),
    )
    .unwrap_err();
    assert!(matches!(err, JobsError::Io(_)));
}

#[test]
fn test_empty_tag_is_malformed() {
    let dir = changelog_dir(CHANGELOG);
    let err = run_job(
        &args("check-changelog", Some(""), dir.path()),
        &Config::default(),
    )
    .unwrap_err();
    assert!(matches!(err, JobsError::MalformedTag(_)));
}

#[test]
fn test_odd_prefix_warns_but_runs() {
    let dir = changelog_dir(CHANGELOG);
    let report = run_job(
        &args("print-changelog", Some("r1.2.3"), dir.path()),
        &Config::default(),
    )
    .unwrap();

    assert!(matches!(
        report.outcome,
        JobOutcome::Printed { ref notes, .. } if notes == "Line A\nLine B\n"
    ));
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::UnexpectedTagPrefix { .. })));
}
