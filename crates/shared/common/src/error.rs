//! Unified error handling for configuration checks.
//!
//! Loading settings never fails: missing variables fall back to defaults.
//! These errors only surface from explicit checks (strict environment
//! parsing, validation, upload policy).

use thiserror::Error;
use validator::ValidationErrors;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown environment '{0}' (expected development, production or default)")]
    UnknownEnvironment(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Get error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::UnknownEnvironment(_) => "UNKNOWN_ENVIRONMENT",
            ConfigError::Invalid(_) => "INVALID_CONFIGURATION",
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                format!("{}: {}", field, message)
            })
            .collect();
        fields.sort();
        ConfigError::Invalid(fields.join("; "))
    }
}

/// Rejections produced by the upload policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("File '{0}' has no extension")]
    MissingExtension(String),

    #[error("File type '.{extension}' is not allowed")]
    DisallowedExtension { extension: String },

    #[error("File is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience constructors
impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::Invalid(msg.into())
    }

    pub fn unknown_environment(name: impl Into<String>) -> Self {
        ConfigError::UnknownEnvironment(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ConfigError::unknown_environment("staging").code(),
            "UNKNOWN_ENVIRONMENT"
        );
        assert_eq!(ConfigError::invalid("x").code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_upload_error_messages() {
        let err = UploadError::TooLarge { size: 20, limit: 10 };
        assert_eq!(err.to_string(), "File is 20 bytes, the limit is 10 bytes");

        let err = UploadError::DisallowedExtension {
            extension: "exe".to_string(),
        };
        assert_eq!(err.to_string(), "File type '.exe' is not allowed");
    }
}
