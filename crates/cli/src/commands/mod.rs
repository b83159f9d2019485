//! Commands module - CLI command implementations.

pub mod check;
pub mod show;
pub mod upload_check;

use std::env;

use common::config::{environment_name, load_dotenv};
use common::{Config, Environment};

use crate::cli::EnvArgs;
use crate::errors::CommandResult;

/// Load the settings a command operates on.
///
/// With `strict`, an environment name outside the lookup table is reported
/// instead of falling back to development.
pub fn resolve_config(env: &EnvArgs, strict: bool) -> CommandResult<Config> {
    load_dotenv();
    resolve_with(env, strict, |key| env::var(key).ok())
}

/// Resolve settings with environment access going through `lookup`.
///
/// `--env` wins over `APP_ENV` / `FLASK_ENV`; empty values count as absent.
pub fn resolve_with<F>(env: &EnvArgs, strict: bool, lookup: F) -> CommandResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let name = env
        .environment
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| environment_name(&lookup));

    if strict {
        if let Some(name) = name.as_deref() {
            name.parse::<Environment>()?;
        }
    }

    let config = Config::from_lookup(name.as_deref(), &lookup);
    tracing::debug!(environment = %config.environment, "Settings resolved");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CommandError;
    use common::ConfigError;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn explicit(name: &str) -> EnvArgs {
        EnvArgs {
            environment: Some(name.to_string()),
        }
    }

    #[test]
    fn test_strict_resolution_rejects_unknown_name() {
        let err = resolve_with(&explicit("staging"), true, vars(&[])).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Config(ConfigError::UnknownEnvironment(_))
        ));
    }

    #[test]
    fn test_lenient_resolution_falls_back() {
        let config = resolve_with(&explicit("staging"), false, vars(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.debug);
    }

    #[test]
    fn test_strict_resolution_checks_flask_env() {
        let err = resolve_with(
            &EnvArgs::default(),
            true,
            vars(&[("FLASK_ENV", "prodution")]),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CommandError::Config(ConfigError::UnknownEnvironment(name)) if name == "prodution"
        ));
    }

    #[test]
    fn test_flask_env_selects_variant() {
        let config = resolve_with(
            &EnvArgs::default(),
            true,
            vars(&[("APP_ENV", ""), ("FLASK_ENV", "production")]),
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert!(!config.debug);
    }

    #[test]
    fn test_explicit_env_wins_over_variables() {
        let config = resolve_with(
            &explicit("development"),
            true,
            vars(&[("FLASK_ENV", "production")]),
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_no_name_resolves_to_development() {
        let config = resolve_with(&EnvArgs::default(), true, vars(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
    }
}
