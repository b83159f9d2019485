//! Settings inspection tool for the complaint tracking application.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the production settings as JSON
//! complaint-config show --env production --json
//!
//! # Validate the settings the application would load
//! complaint-config check
//!
//! # Check an attachment against the upload policy
//! complaint-config upload-check receipt.pdf --size 204800
//! ```

pub mod cli;
pub mod commands;
pub mod errors;

pub use errors::{CommandError, CommandResult};
