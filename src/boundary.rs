use std::fmt;

use crate::domain::ReleaseTag;

/// Warnings about suspicious but legal input at the edges of a job.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag does not start with the conventional 'v' prefix
    UnexpectedTagPrefix { tag: String, prefix: char },
    /// Version part of the tag is not a semantic version
    NonSemverVersion {
        tag: String,
        version: String,
        reason: String,
    },
    /// No release heading matched, nothing was extracted
    SectionNotFound { heading: String, file: String },
    /// The requested job name is not known, nothing was run
    UnknownJob { name: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnexpectedTagPrefix { tag, prefix } => {
                write!(
                    f,
                    "Tag '{}' starts with '{}' instead of 'v', stripping it anyway",
                    tag, prefix
                )
            }
            BoundaryWarning::NonSemverVersion {
                tag,
                version,
                reason,
            } => {
                write!(
                    f,
                    "Tag '{}' has version '{}' which is not semver: {}",
                    tag, version, reason
                )
            }
            BoundaryWarning::SectionNotFound { heading, file } => {
                write!(f, "No heading '{}' found in {}", heading, file)
            }
            BoundaryWarning::UnknownJob { name } => {
                write!(
                    f,
                    "Unknown job '{}', expected check-changelog or print-changelog",
                    name
                )
            }
        }
    }
}

/// Inspects a release tag and reports anything unusual about it.
///
/// Never fails: the section key is derived the same way regardless.
pub fn inspect_tag(tag: &ReleaseTag) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    let Some(prefix) = tag.prefix() else {
        return warnings;
    };

    if prefix != 'v' && prefix != 'V' {
        warnings.push(BoundaryWarning::UnexpectedTagPrefix {
            tag: tag.name.clone(),
            prefix,
        });
    }

    if let Ok(version) = tag.version_part() {
        if let Err(e) = semver::Version::parse(version) {
            warnings.push(BoundaryWarning::NonSemverVersion {
                tag: tag.name.clone(),
                version: version.to_string(),
                reason: e.to_string(),
            });
        }
    }

    warnings
}
