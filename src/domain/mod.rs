//! Domain logic - pure rules for tags and changelog sections, independent of I/O

pub mod tag;

pub use tag::{ReleaseTag, SectionKey, HEADING_MARKER};
