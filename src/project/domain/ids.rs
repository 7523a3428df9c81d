//! Identifier types assigned by the remote project service.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a remote project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Creates a validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidProjectId`] when the value is
    /// zero.
    pub fn new(value: u64) -> Result<Self, ProjectDomainError> {
        if value == 0 {
            return Err(ProjectDomainError::InvalidProjectId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses the string form used by project configuration.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidProjectId`] when the value is not
    /// a positive integer.
    pub fn parse(raw: &str) -> Result<Self, ProjectDomainError> {
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ProjectDomainError::InvalidProjectId(raw.to_owned()))?;
        Self::new(value).map_err(|_| ProjectDomainError::InvalidProjectId(raw.to_owned()))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a file within a remote project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(u64);

impl FileId {
    /// Wraps a remote file identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a version branch within a remote project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(u64);

impl BranchId {
    /// Wraps a remote branch identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
