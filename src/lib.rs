pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use changelog::Changelog;
pub use error::{JobsError, Result};
