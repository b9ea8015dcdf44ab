//! Command-line facing logic that does not depend on clap

pub mod orchestration;

pub use orchestration::{run_job, Job, JobArgs, JobOutcome, JobReport};
