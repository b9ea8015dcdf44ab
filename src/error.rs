use thiserror::Error;

/// Unified error type for release-jobs operations
#[derive(Error, Debug)]
pub enum JobsError {
    #[error(
        "You're trying to create a new release tag {tag}, but that release is not mentioned\nin the changelog. Add a section called {key} to {file} and try again."
    )]
    MissingSection {
        tag: String,
        key: String,
        file: String,
    },

    #[error("Job '{job}' requires a release tag, pass one with --tag")]
    MissingTag { job: String },

    #[error("Malformed release tag: {0}")]
    MalformedTag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-jobs
pub type Result<T> = std::result::Result<T, JobsError>;

impl JobsError {
    /// Create a missing-section error for the given tag, key and changelog file
    pub fn missing_section(
        tag: impl Into<String>,
        key: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        JobsError::MissingSection {
            tag: tag.into(),
            key: key.into(),
            file: file.into(),
        }
    }

    /// Create a missing-tag error for the named job
    pub fn missing_tag(job: impl Into<String>) -> Self {
        JobsError::MissingTag { job: job.into() }
    }

    /// Create a malformed-tag error with context
    pub fn malformed_tag(msg: impl Into<String>) -> Self {
        JobsError::MalformedTag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        JobsError::Config(msg.into())
    }
}
