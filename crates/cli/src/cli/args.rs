//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

/// Complaint tracker settings - inspect and validate configuration variants
#[derive(Parser, Debug)]
#[command(name = "complaint-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the selected settings (secrets redacted)
    Show(ShowArgs),

    /// Validate the selected settings
    Check(CheckArgs),

    /// Check an attachment against the upload policy
    UploadCheck(UploadCheckArgs),
}

/// Environment selection shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Environment name (development, production or default)
    #[arg(short, long = "env", env = "APP_ENV")]
    pub environment: Option<String>,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Print JSON instead of the debug rendering
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub env: EnvArgs,
}

/// Arguments for the upload-check command
#[derive(Args, Debug)]
pub struct UploadCheckArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// File name as submitted by the client
    pub filename: String,

    /// File size in bytes
    #[arg(short, long)]
    pub size: u64,
}
