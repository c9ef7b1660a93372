//! Lexis CLI - Translate a sentence and break it into a vocabulary table.

use clap::Parser;
use lexis_cli::commands;
use lexis_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> lexis_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Log to stderr so stdout stays clean for CSV and JSON
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config, falling back to defaults
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => {
            config.validate()?;
            commands::execute_analyze(args, &config, &formatter).await?;
        }
        Command::Parse(args) => {
            commands::execute_parse(args, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &mut config, &config_path, &formatter).await?;
        }
    }

    Ok(())
}
