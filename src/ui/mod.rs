//! User interface module - diagnostics and job output.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_notes, display_status, display_success,
};
