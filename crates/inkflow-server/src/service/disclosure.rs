//! Runtime environment and error disclosure policy.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Environment the service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AppEnvironment {
    /// Local development; failures carry their full cause chain.
    Development,
    /// Production; failures carry only their message.
    #[default]
    Production,
}

impl AppEnvironment {
    /// Returns the error disclosure policy for this environment.
    #[must_use]
    pub const fn disclosure(self) -> ErrorDisclosure {
        match self {
            Self::Development => ErrorDisclosure::Full,
            Self::Production => ErrorDisclosure::Hidden,
        }
    }
}

/// Controls whether error responses include the failure's cause chain.
///
/// Used for the [`State`] extraction.
///
/// [`State`]: axum::extract::State
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDisclosure {
    /// Only the error message and details are returned.
    #[default]
    Hidden,
    /// The cause chain is returned as `stack` as well.
    Full,
}

impl ErrorDisclosure {
    /// Returns `true` if cause chains may be sent to clients.
    #[must_use]
    pub const fn allows_stack(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Renders the cause chain of `error` if this policy allows it.
    pub fn stack_trace(self, error: &inkflow_core::Error) -> Option<String> {
        self.allows_stack().then(|| error.diagnostic_trace())
    }
}
