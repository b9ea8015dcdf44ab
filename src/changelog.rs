//! Changelog access - presence check and section extraction.
//!
//! Both operations work on plain substring matching over the raw file
//! content. A key like `[1.2]` also matches inside `[1.2.3]`; headings are
//! recognised wherever `## [` appears in a line, not only at its start.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ReleaseTag, SectionKey, HEADING_MARKER};
use crate::error::{JobsError, Result};

/// Default changelog location, relative to the working directory
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Label of the reserved section holding not-yet-released changes
pub const DEFAULT_UNRELEASED_LABEL: &str = "Unreleased";

/// A changelog document read fresh from disk.
#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
    content: String,
}

impl Changelog {
    /// Reads the whole changelog at `path`.
    ///
    /// `\r\n` and lone `\r` line endings are normalised to `\n`.
    ///
    /// # Returns
    /// * `Ok(Changelog)` - File content loaded
    /// * `Err(JobsError::Io)` - File missing or unreadable
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = normalize_line_endings(fs::read_to_string(path)?);
        Ok(Changelog {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Builds a changelog from in-memory content, `path` is only used in messages.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Changelog {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Display name used in diagnostics
    pub fn file_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Checks that the release for `tag` is mentioned anywhere in the changelog.
    ///
    /// For a tag like `v1.2.3` the content must contain `[1.2.3]` somewhere;
    /// it does not have to be part of a heading.
    ///
    /// # Returns
    /// * `Ok(())` - The section key was found
    /// * `Err(JobsError::MissingSection)` - Key absent, message names tag, key and file
    /// * `Err(JobsError::MalformedTag)` - Empty tag
    pub fn check(&self, tag: &ReleaseTag) -> Result<()> {
        let key = tag.section_key()?.to_string();

        if self.content.contains(&key) {
            Ok(())
        } else {
            Err(JobsError::missing_section(
                tag.name.clone(),
                key,
                self.file_name(),
            ))
        }
    }

    /// Returns the notes of the release section for `key`.
    ///
    /// Capturing starts after the first line containing `## [<version>]`
    /// that does not also contain the reserved `## [<unreleased_label>]`
    /// heading, and stops at the next line containing `## [`. Lines keep
    /// their trailing newline.
    ///
    /// # Returns
    /// * `Some(text)` - The heading matched, `text` may be empty
    /// * `None` - No heading matched
    pub fn section(&self, key: &SectionKey, unreleased_label: &str) -> Option<String> {
        let start = key.heading();
        let unreleased = format!("{}{}]", HEADING_MARKER, unreleased_label);

        let mut capturing = false;
        let mut output = String::new();

        for line in self.content.split_inclusive('\n') {
            if !capturing {
                if line.contains(&start) && !line.contains(&unreleased) {
                    capturing = true;
                }
                continue;
            }

            if line.contains(HEADING_MARKER) {
                break;
            }
            output.push_str(line);
        }

        capturing.then_some(output)
    }

    /// Extracts the notes for `tag`, empty when no release heading matches.
    pub fn extract(&self, tag: &ReleaseTag, unreleased_label: &str) -> Result<String> {
        let key = tag.section_key()?;
        Ok(self.section(&key, unreleased_label).unwrap_or_default())
    }
}

fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}
