//! Application-wide constants
//!
//! Centralized location for configuration defaults and variable names.

// =============================================================================
// Environment Variables
// =============================================================================

/// Secret key used to sign sessions
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// Database connection URI
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment name selecting the configuration variant
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Legacy environment name variable, consulted when `APP_ENV` is unset
pub const ENV_FLASK_ENV: &str = "FLASK_ENV";

// =============================================================================
// Environment Names
// =============================================================================

pub const ENVIRONMENT_DEVELOPMENT: &str = "development";

pub const ENVIRONMENT_PRODUCTION: &str = "production";

/// Alias resolving to the development variant
pub const ENVIRONMENT_DEFAULT: &str = "default";

// =============================================================================
// Security
// =============================================================================

/// Fallback secret key (development only)
pub const DEFAULT_SECRET_KEY: &str = "smart-complaint-secret-key-2024";

// =============================================================================
// Database
// =============================================================================

/// Modification tracking is disabled for every variant
pub const DEFAULT_TRACK_MODIFICATIONS: bool = false;

// =============================================================================
// Uploads
// =============================================================================

/// Directory uploaded attachments are stored in
pub const DEFAULT_UPLOAD_FOLDER: &str = "static/uploads";

/// Maximum request body size in bytes (16MB)
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;

/// File extensions accepted for attachments
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "pdf", "doc", "docx"];

// =============================================================================
// Sessions
// =============================================================================

pub const DEFAULT_SESSION_COOKIE_SECURE: bool = false;

pub const DEFAULT_SESSION_COOKIE_HTTPONLY: bool = true;

/// Permanent session lifetime in seconds (1 day)
pub const DEFAULT_SESSION_LIFETIME_SECONDS: u64 = 24 * 60 * 60;

// =============================================================================
// Redaction
// =============================================================================

/// Placeholder printed instead of secret values
pub const REDACTED: &str = "[REDACTED]";
