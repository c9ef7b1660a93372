//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lexis CLI - Break a sentence into a vocabulary table.
#[derive(Debug, Parser)]
#[command(name = "lexis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a sentence and extract its vocabulary
    Analyze(AnalyzeArgs),

    /// Run the parser over a saved model response
    Parse(ParseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Sentence to analyze
    pub text: String,

    /// Source language code (zh, ja, ko, en, th)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Target language code for meanings and the translation
    #[arg(short, long)]
    pub target: Option<String>,

    /// Skip the full-sentence translation
    #[arg(long)]
    pub no_translate: bool,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key (overrides environment and config)
    #[arg(long, env = "LEXIS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Also write the vocabulary as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the raw model response before the table
    #[arg(long)]
    pub show_raw: bool,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// File holding the raw response
    pub file: Option<PathBuf>,

    /// Read the raw response from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Read the response as this shape instead of detecting it
    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Also write the vocabulary as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Response shapes the parser understands.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ShapeArg {
    /// JSON array of objects
    Json,
    /// Tab-delimited rows
    Delimited,
    /// Six numbered lines per word
    Numbered,
    /// Dash-separated rows
    Loose,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Key, e.g. model, target_language, api_key
        key: String,
        /// New value
        value: String,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
        }
    }
}

impl From<ShapeArg> for lexis_extractor::ResponseFormat {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Json => lexis_extractor::ResponseFormat::Json,
            ShapeArg::Delimited => lexis_extractor::ResponseFormat::Delimited,
            ShapeArg::Numbered => lexis_extractor::ResponseFormat::NumberedList,
            ShapeArg::Loose => lexis_extractor::ResponseFormat::Loose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from(["lexis", "analyze", "你好，世界！", "--target", "en"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.text, "你好，世界！");
                assert_eq!(args.target.as_deref(), Some("en"));
                assert!(!args.no_translate);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_parse_command_with_global_flags() {
        let cli = Cli::parse_from(["lexis", "parse", "response.txt", "--shape", "numbered", "-f", "csv"]);
        assert!(matches!(cli.format, Some(CliFormat::Csv)));
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.file, Some(PathBuf::from("response.txt")));
                assert!(matches!(args.shape, Some(ShapeArg::Numbered)));
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_config_set_command() {
        let cli = Cli::parse_from(["lexis", "config", "set", "model", "gpt-4o-mini"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Set { key, value },
            }) => {
                assert_eq!(key, "model");
                assert_eq!(value, "gpt-4o-mini");
            }
            _ => panic!("Expected Config Set command"),
        }
    }

    #[test]
    fn test_shape_conversion() {
        let format: lexis_extractor::ResponseFormat = ShapeArg::Numbered.into();
        assert_eq!(format, lexis_extractor::ResponseFormat::NumberedList);
    }
}
