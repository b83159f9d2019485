//! Complaint tracker settings tool - Application entry point
//!
//! CLI-based entry point that dispatches to the settings commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::config::load_dotenv;
use complaint_config::{
    cli::{Cli, Commands},
    commands,
};

fn main() {
    // Load .env before parsing so APP_ENV can come from it
    load_dotenv();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Show(args) => commands::resolve_config(&args.env, false)
            .and_then(|config| commands::show::execute(args, &config)),
        Commands::Check(args) => commands::resolve_config(&args.env, true)
            .and_then(|config| commands::check::execute(args, &config)),
        Commands::UploadCheck(args) => commands::resolve_config(&args.env, false)
            .and_then(|config| commands::upload_check::execute(args, &config)),
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
