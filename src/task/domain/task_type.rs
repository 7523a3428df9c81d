//! Standard-tier task types.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};

/// Kind of work a standard-tier task asks for.
///
/// The remote API encodes the type as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TaskType {
    /// Translate the selected strings.
    Translate,
    /// Proofread existing translations.
    Proofread,
}

impl TaskType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Translate => 0,
            Self::Proofread => 1,
        }
    }

    /// Returns the lowercase display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Proofread => "proofread",
        }
    }
}

impl TryFrom<i64> for TaskType {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Translate),
            1 => Ok(Self::Proofread),
            _ => Err(TaskDomainError::InvalidTaskType(value)),
        }
    }
}

impl From<TaskType> for i64 {
    fn from(value: TaskType) -> Self {
        value.code()
    }
}
