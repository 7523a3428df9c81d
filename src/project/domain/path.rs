//! Canonical project-relative file paths.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// File path inside a remote project, in canonical form.
///
/// The canonical form uses `/` as the only separator, carries exactly one
/// leading `/`, and has no empty segments. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Canonical path separator.
    pub const SEPARATOR: char = '/';

    /// Creates a canonical path from user or remote input.
    ///
    /// Backslashes are treated as separators and repeated separators
    /// collapse, so `dir\\file.txt`, `/dir/file.txt` and `dir//file.txt`
    /// all canonicalize to `/dir/file.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyPath`] when no segment remains.
    pub fn new(raw: &str) -> Result<Self, ProjectDomainError> {
        let segments: Vec<&str> = raw
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            return Err(ProjectDomainError::EmptyPath);
        }

        let mut canonical = String::with_capacity(raw.len() + 1);
        for segment in segments {
            canonical.push(Self::SEPARATOR);
            canonical.push_str(segment);
        }
        Ok(Self(canonical))
    }

    /// Returns the canonical path as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectPath {
    type Error = ProjectDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ProjectPath> for String {
    fn from(value: ProjectPath) -> Self {
        value.0
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
