use std::fmt;

use crate::error::{JobsError, Result};

/// Markdown marker that opens every release heading
pub const HEADING_MARKER: &str = "## [";

/// Represents a release tag supplied by the caller (e.g. "v1.2.3")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
}

impl ReleaseTag {
    /// Create a new release tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        ReleaseTag { name: name.into() }
    }

    /// The leading prefix character, if any
    pub fn prefix(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Strip the leading prefix character (e.g. "v1.2.3" -> "1.2.3")
    ///
    /// Only the first character is removed, whatever it is. An empty tag has
    /// nothing to strip and is rejected.
    pub fn version_part(&self) -> Result<&str> {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(_) => Ok(chars.as_str()),
            None => Err(JobsError::malformed_tag(
                "tag is empty, expected something like v1.2.3",
            )),
        }
    }

    /// Derive the changelog section key for this tag
    pub fn section_key(&self) -> Result<SectionKey> {
        Ok(SectionKey::new(self.version_part()?))
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Bracketed section label used to find a release in the changelog (e.g. "[1.2.3]")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionKey {
    version: String,
}

impl SectionKey {
    /// Create a key for a bare version string
    pub fn new(version: impl Into<String>) -> Self {
        SectionKey {
            version: version.into(),
        }
    }

    /// The version inside the brackets
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Heading form of the key (e.g. "## [1.2.3]")
    pub fn heading(&self) -> String {
        format!("{}{}]", HEADING_MARKER, self.version)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.version)
    }
}
