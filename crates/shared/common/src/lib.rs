//! Shared settings for the complaint tracking application.
//!
//! This crate provides:
//! - The configuration record and its named environment variants
//! - Upload and session policies derived from the configuration
//! - Unified error types for configuration checks

pub mod config;
pub mod error;

pub use config::{Config, Environment, SessionPolicy, UploadPolicy};
pub use error::{ConfigError, ConfigResult, UploadError};
