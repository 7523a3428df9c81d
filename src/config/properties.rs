//! Project properties file and environment overrides.

use super::{ConfigError, ConfigResult};
use crate::project::domain::ProjectId;
use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tracing::debug;
use url::Url;

/// Environment variable overriding `project_id`.
pub const PROJECT_ID_ENV: &str = "L10N_PROJECT_ID";

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "L10N_BASE_URL";

/// Host of the standard-tier API. Any other configured host selects the
/// enterprise tier.
pub const DEFAULT_API_HOST: &str = "api.crowdin.com";

/// Source of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when it is unset or not UTF-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Project settings used to locate the remote project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectProperties {
    /// Numeric project identifier, in string form.
    pub project_id: Option<String>,
    /// API base URL; absent means the standard-tier API.
    pub base_url: Option<String>,
}

impl ProjectProperties {
    /// Default properties file name.
    pub const FILE_NAME: &'static str = "l10n.toml";

    /// Parses properties from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads [`ProjectProperties::FILE_NAME`] from `dir` and applies process
    /// environment overrides.
    ///
    /// A missing file yields default properties before overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read,
    /// and [`ConfigError::Parse`] when it is malformed.
    pub fn load(dir: &Dir) -> ConfigResult<Self> {
        let properties = Self::load_file(dir, Utf8Path::new(Self::FILE_NAME))?;
        Ok(properties.with_env_overrides(&ProcessEnv))
    }

    /// Loads properties from `path` inside `dir` without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read,
    /// and [`ConfigError::Parse`] when it is malformed.
    pub fn load_file(dir: &Dir, path: &Utf8Path) -> ConfigResult<Self> {
        match dir.read_to_string(path) {
            Ok(text) => {
                debug!(%path, "loaded project properties");
                Self::from_toml_str(&text)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(%path, "no project properties file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Replaces fields with non-blank values from `env`.
    #[must_use]
    pub fn with_env_overrides(mut self, env: &impl EnvSource) -> Self {
        if let Some(project_id) = non_blank(env.var(PROJECT_ID_ENV)) {
            self.project_id = Some(project_id);
        }
        if let Some(base_url) = non_blank(env.var(BASE_URL_ENV)) {
            self.base_url = Some(base_url);
        }
        self
    }

    /// Returns the validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProjectId`] when none is configured and
    /// [`ConfigError::InvalidProjectId`] when it is not a positive integer.
    pub fn project_id(&self) -> ConfigResult<ProjectId> {
        let raw = self
            .project_id
            .as_deref()
            .ok_or(ConfigError::MissingProjectId)?;
        Ok(ProjectId::parse(raw)?)
    }

    /// Returns `true` when the base URL points at an enterprise host.
    ///
    /// An absent or blank base URL, or one whose host is
    /// [`DEFAULT_API_HOST`], selects the standard tier. A trailing root dot
    /// on the host is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the base URL cannot be
    /// parsed or has no host.
    pub fn is_enterprise(&self) -> ConfigResult<bool> {
        let Some(raw) = self.base_url.as_deref().map(str::trim) else {
            return Ok(false);
        };
        if raw.is_empty() {
            return Ok(false);
        }
        let url = Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            source: Some(err),
        })?;
        let host = url
            .host_str()
            .map(|name| name.trim_end_matches('.'))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ConfigError::InvalidBaseUrl {
                url: raw.to_owned(),
                source: None,
            })?;
        debug!(%host, "detected API host");
        Ok(!host.eq_ignore_ascii_case(DEFAULT_API_HOST))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
