//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexis_domain::traits::GenerationProvider;
use lexis_domain::Language;
use lexis_extractor::{AnalysisRequest, Analyzer};
use lexis_llm::OpenAiProvider;
use std::path::Path;
use tracing::debug;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.text.trim().is_empty() {
        return Err(CliError::InvalidInput("Please provide an API key and input text.".to_string()));
    }

    let api_key = args
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| config.api_key())
        .ok_or(CliError::MissingApiKey)?;

    let model = args.model.clone().unwrap_or_else(|| config.provider.model.clone());
    debug!("Using model {} at {}", model, config.provider.endpoint);

    let provider = OpenAiProvider::new(&config.provider.endpoint, model, api_key)
        .with_max_retries(config.provider.max_retries);
    let analyzer = Analyzer::new(provider, config.analyzer.clone());

    let request = build_request(&args, config)?;
    run_analysis(&analyzer, request, args.show_raw, args.csv.as_deref(), formatter).await
}

/// Apply command-line overrides to the configured request defaults.
fn build_request(args: &AnalyzeArgs, config: &Config) -> Result<AnalysisRequest> {
    let source = args
        .source
        .as_deref()
        .unwrap_or(&config.analyzer.source_language)
        .parse::<Language>()
        .map_err(CliError::InvalidInput)?;
    let target = args
        .target
        .as_deref()
        .unwrap_or(&config.analyzer.target_language)
        .parse::<Language>()
        .map_err(CliError::InvalidInput)?;

    Ok(AnalysisRequest::new(args.text.clone(), target)
        .with_source_language(source)
        .with_translation(config.analyzer.translate && !args.no_translate))
}

/// Run one analysis and print it.
async fn run_analysis<L>(
    analyzer: &Analyzer<L>,
    request: AnalysisRequest,
    show_raw: bool,
    csv_path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()>
where
    L: GenerationProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let result = analyzer.analyze(request).await?;

    if show_raw {
        eprintln!("{}", formatter.info("Raw response:"));
        eprintln!("{}\n", result.raw_response);
    }

    println!("{}", formatter.format_analysis(&result)?);

    if let Some(error) = result.vocabulary.error() {
        eprintln!("{}", formatter.warning(&error.to_string()));
    }

    if let Some(path) = csv_path {
        super::export_csv(result.vocabulary.entries(), path, formatter)?;
    }

    Ok(())
}
