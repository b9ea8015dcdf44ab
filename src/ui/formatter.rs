//! Pure formatting functions for UI output.
//!
//! Every diagnostic goes to stderr so stdout carries only job output
//! (the extracted release notes). The `format_*` functions build the
//! coloured line, the `display_*` functions print it.

use crate::boundary::BoundaryWarning;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("\x1b[31mERROR:\x1b[0m {}", message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("\x1b[32m✓\x1b[0m {}", message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("\x1b[33m→\x1b[0m {}", message)
}

/// Format a boundary warning with a yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{}", format_success(message));
}

/// Print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Print extracted release notes to stdout.
///
/// A trailing newline is always added, so an empty section prints an
/// empty line.
pub fn display_notes(notes: &str) {
    println!("{}", notes);
}
