//! Named configuration variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{ENVIRONMENT_DEFAULT, ENVIRONMENT_DEVELOPMENT, ENVIRONMENT_PRODUCTION};
use crate::error::ConfigError;

/// Deployment environment a configuration variant is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Select the variant for an environment name.
    ///
    /// Unknown and absent names resolve to [`Environment::Development`].
    pub fn select(name: Option<&str>) -> Self {
        match name {
            Some(ENVIRONMENT_PRODUCTION) => Environment::Production,
            Some(ENVIRONMENT_DEVELOPMENT) | Some(ENVIRONMENT_DEFAULT) | None => {
                Environment::Development
            }
            Some(other) => {
                tracing::debug!(
                    environment = other,
                    "Unknown environment name, using development settings"
                );
                Environment::Development
            }
        }
    }

    /// Debug flag carried by this variant.
    pub fn debug(self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => ENVIRONMENT_DEVELOPMENT,
            Environment::Production => ENVIRONMENT_PRODUCTION,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: anything outside the lookup table is an error.
impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ENVIRONMENT_DEVELOPMENT | ENVIRONMENT_DEFAULT => Ok(Environment::Development),
            ENVIRONMENT_PRODUCTION => Ok(Environment::Production),
            other => Err(ConfigError::unknown_environment(other)),
        }
    }
}
