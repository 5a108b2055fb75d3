mod cli;
mod engine;
mod error;
mod logging;
mod model;
mod orchestrator;
mod preferences;
mod profile;
mod recipes;
mod router;
mod schema;
mod suggest;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let is_non_tui = args.text || args.json;

    match cli::run(args).await {
        Ok(()) => {
            // Explicitly exit with code 0 on success in non-TUI modes
            if is_non_tui {
                std::process::exit(0);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "pantrypal failed");
            Err(e)
        }
    }
}
