//! Error types for loading project properties.

use crate::project::domain::ProjectDomainError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors returned while loading or interpreting project properties.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The properties file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the properties file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The properties file is not valid TOML for the expected shape.
    #[error("failed to parse project properties: {0}")]
    Parse(#[from] toml::de::Error),

    /// No project identifier was configured.
    #[error("project_id is not configured")]
    MissingProjectId,

    /// The configured base URL cannot be parsed or has no host.
    #[error("invalid base_url '{url}'")]
    InvalidBaseUrl {
        /// Configured base URL.
        url: String,
        /// Parse failure, absent when the URL parsed but has no host.
        #[source]
        source: Option<url::ParseError>,
    },

    /// The configured project identifier is malformed.
    #[error(transparent)]
    InvalidProjectId(#[from] ProjectDomainError),
}
