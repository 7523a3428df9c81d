//! Project properties consumed by task creation.
//!
//! Properties come from an `l10n.toml` file, overridden by environment
//! variables. Callers derive the product tier from the configured base URL
//! once and hand the resulting flag to the task services.

mod error;
mod properties;

pub use error::{ConfigError, ConfigResult};
pub use properties::{
    BASE_URL_ENV, DEFAULT_API_HOST, EnvSource, PROJECT_ID_ENV, ProcessEnv, ProjectProperties,
};
