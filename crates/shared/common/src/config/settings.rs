//! Application settings loaded from environment variables.

use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::{Serialize, Serializer};
use validator::Validate;

use super::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_SECRET_KEY,
    DEFAULT_SESSION_COOKIE_HTTPONLY, DEFAULT_SESSION_COOKIE_SECURE,
    DEFAULT_SESSION_LIFETIME_SECONDS, DEFAULT_TRACK_MODIFICATIONS, DEFAULT_UPLOAD_FOLDER,
    ENV_APP_ENV, ENV_DATABASE_URL, ENV_FLASK_ENV, ENV_SECRET_KEY, REDACTED,
};
use super::environment::Environment;
use crate::error::{ConfigError, ConfigResult};

static GLOBAL: OnceCell<Config> = OnceCell::new();

static DOTENV: OnceCell<()> = OnceCell::new();

/// Load the `.env` file in the working directory, at most once per process.
pub fn load_dotenv() {
    DOTENV.get_or_init(|| {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
    });
}

/// Environment name from `APP_ENV`, falling back to `FLASK_ENV`.
///
/// Empty values count as absent.
pub fn environment_name<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|v| !v.is_empty());
    read(ENV_APP_ENV).or_else(|| read(ENV_FLASK_ENV))
}

/// Application configuration
///
/// Every field except `debug` is shared between the development and
/// production variants.
#[derive(Clone, Serialize, Validate)]
pub struct Config {
    pub environment: Environment,
    pub debug: bool,
    #[serde(skip_serializing)]
    #[validate(length(min = 1, message = "Secret key cannot be empty"))]
    secret_key: String,
    #[serde(serialize_with = "redact_option")]
    pub database_url: Option<String>,
    pub track_modifications: bool,
    pub upload_folder: PathBuf,
    #[validate(range(min = 1, message = "Upload limit must be at least one byte"))]
    pub max_content_length: u64,
    pub allowed_extensions: BTreeSet<String>,
    pub session_cookie_secure: bool,
    pub session_cookie_httponly: bool,
    #[serde(rename = "permanent_session_lifetime_seconds")]
    #[serde(serialize_with = "duration_as_secs")]
    pub permanent_session_lifetime: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("debug", &self.debug)
            .field("secret_key", &REDACTED)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| REDACTED),
            )
            .field("track_modifications", &self.track_modifications)
            .field("upload_folder", &self.upload_folder)
            .field("max_content_length", &self.max_content_length)
            .field("allowed_extensions", &self.allowed_extensions)
            .field("session_cookie_secure", &self.session_cookie_secure)
            .field("session_cookie_httponly", &self.session_cookie_httponly)
            .field(
                "permanent_session_lifetime",
                &self.permanent_session_lifetime,
            )
            .finish()
    }
}

impl Config {
    /// Build the variant for `environment` with every field at its default.
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            debug: environment.debug(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            database_url: None,
            track_modifications: DEFAULT_TRACK_MODIFICATIONS,
            upload_folder: PathBuf::from(DEFAULT_UPLOAD_FOLDER),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            session_cookie_secure: DEFAULT_SESSION_COOKIE_SECURE,
            session_cookie_httponly: DEFAULT_SESSION_COOKIE_HTTPONLY,
            permanent_session_lifetime: Duration::from_secs(DEFAULT_SESSION_LIFETIME_SECONDS),
        }
    }

    /// Build the variant selected by `name`, reading overrides through `lookup`.
    ///
    /// Absent or empty variables fall back to defaults; this never fails.
    pub fn from_lookup<F>(name: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::select(name);
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut config = Self::for_environment(environment);

        match read(ENV_SECRET_KEY) {
            Some(secret) => config.secret_key = secret,
            None if environment.is_production() => {
                tracing::warn!("SECRET_KEY not set, using insecure default in production");
            }
            None => {
                tracing::debug!("SECRET_KEY not set, using development default");
            }
        }

        config.database_url = read(ENV_DATABASE_URL);

        tracing::debug!(
            environment = %config.environment,
            debug = config.debug,
            "Configuration loaded"
        );

        config
    }

    /// Load the variant selected by `name` from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env(name: Option<&str>) -> Self {
        load_dotenv();
        Self::from_lookup(name, |key| env::var(key).ok())
    }

    /// Load configuration, taking the environment name from `APP_ENV`
    /// (or `FLASK_ENV` when that is unset or empty).
    pub fn load() -> Self {
        load_dotenv();
        let lookup = |key: &str| env::var(key).ok();
        let name = environment_name(lookup);
        Self::from_lookup(name.as_deref(), lookup)
    }

    /// Process-wide configuration, loaded on first access.
    pub fn global() -> &'static Config {
        GLOBAL.get_or_init(Self::load)
    }

    /// Get secret key bytes for session signing.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    /// Whether the hardcoded fallback secret is in use.
    pub fn is_using_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    /// Check structural constraints on the loaded values.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut problems = Vec::new();

        if let Err(errors) = Validate::validate(self) {
            if let ConfigError::Invalid(msg) = ConfigError::from(errors) {
                problems.push(msg);
            }
        }
        if self.upload_folder.as_os_str().is_empty() {
            problems.push("upload_folder: Upload folder cannot be empty".to_string());
        }
        if self.allowed_extensions.is_empty() {
            problems.push("allowed_extensions: At least one extension is required".to_string());
        }
        if self.permanent_session_lifetime.is_zero() {
            problems.push(
                "permanent_session_lifetime: Session lifetime must be positive".to_string(),
            );
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::invalid(problems.join("; ")))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

fn redact_option<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}

fn duration_as_secs<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(value.as_secs())
}
