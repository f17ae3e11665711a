//! tsxmend - markup-aware refactors and code fixes for TSX
//!
//! Parses TSX with tree-sitter and serves source transformations the way an
//! editor plugin would: refactor listings at a cursor, diagnostic-triggered
//! code fixes, and byte-offset edits applied against the original text.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tsxmend::app::App;
use tsxmend::cli::{Cli, Commands, commands};

fn main() {
    // Quiet defaults; RUST_LOG=tsxmend=debug for verbose output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tsxmend=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    if let Err(e) = run() {
        // All errors are output as JSON
        let response = serde_json::json!({
            "success": false,
            "error": e.to_string()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| { format!(r#"{{"success":false,"error":"{}"}}"#, e) })
        );
        std::process::exit(2);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app = App::new().map_err(|e| anyhow::anyhow!("Failed to initialize: {}", e))?;

    match cli.command {
        Commands::Refactors(args) => commands::refactors::execute_list(args, &app),
        Commands::Refactor(args) => commands::refactors::execute_apply(args, &app),
        Commands::Fixes(args) => commands::fixes::execute(args, &app),
    }
}
