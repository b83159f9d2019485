//! Check command - Validate the selected settings.

use common::Config;

use crate::cli::args::CheckArgs;
use crate::errors::CommandResult;

/// Non-fatal findings worth reporting for a loaded configuration.
pub fn warnings(config: &Config) -> Vec<String> {
    let mut found = Vec::new();

    if config.environment.is_production() && config.is_using_default_secret() {
        found.push("SECRET_KEY is not set; production is using the built-in secret".to_string());
    }
    if config.database_url.is_none() {
        found.push("DATABASE_URL is not set".to_string());
    }
    if config.environment.is_production() && !config.session_cookie_secure {
        found.push("Session cookies are not marked Secure".to_string());
    }

    found
}

/// Execute the check command
pub fn execute(_args: CheckArgs, config: &Config) -> CommandResult<()> {
    tracing::info!(environment = %config.environment, "Checking settings...");

    config.validate()?;

    for warning in warnings(config) {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Settings are valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Environment;

    #[test]
    fn test_production_defaults_raise_warnings() {
        let config = Config::for_environment(Environment::Production);
        let found = warnings(&config);

        assert_eq!(found.len(), 3);
        assert!(found[0].contains("SECRET_KEY"));
    }

    #[test]
    fn test_configured_development_has_no_warnings() {
        let config = Config::from_lookup(Some("development"), |key| match key {
            "DATABASE_URL" => Some("postgres://localhost/complaints".to_string()),
            _ => None,
        });

        assert!(warnings(&config).is_empty());
    }

    #[test]
    fn test_execute_accepts_defaults() {
        let args = CheckArgs {
            env: Default::default(),
        };
        assert!(execute(args, &Config::default()).is_ok());
    }
}
