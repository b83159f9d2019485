//! Command error handling.

use common::{ConfigError, UploadError};
use thiserror::Error;

/// Errors a command can end with
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Upload rejected: {0}")]
    Upload(#[from] UploadError),

    #[error("Failed to render settings: {0}")]
    Render(#[from] serde_json::Error),
}

impl CommandError {
    /// Get error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Config(e) => e.code(),
            CommandError::Upload(_) => "UPLOAD_REJECTED",
            CommandError::Render(_) => "RENDER_FAILED",
        }
    }
}

/// Result type alias
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_codes() {
        let err = CommandError::from(ConfigError::unknown_environment("staging"));
        assert_eq!(err.code(), "UNKNOWN_ENVIRONMENT");

        let err = CommandError::from(UploadError::TooLarge { size: 2, limit: 1 });
        assert_eq!(err.code(), "UPLOAD_REJECTED");
    }
}
