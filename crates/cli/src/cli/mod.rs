//! CLI module - Command-line interface for the settings tool.
//!
//! Provides commands for:
//! - `show` - Print the selected settings
//! - `check` - Validate the selected settings
//! - `upload-check` - Run the upload policy against a file

pub mod args;

pub use args::{Cli, Commands, EnvArgs};
