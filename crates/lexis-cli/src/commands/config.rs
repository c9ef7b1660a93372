//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Placeholder shown instead of a stored API key
const REDACTED: &str = "********";

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, formatter),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Set { key, value } => set_value(config, path, &key, &value, formatter),
        ConfigAction::Init { force } => init_config(config, path, force, formatter),
    }
}

/// Show the current configuration with the API key redacted.
fn show_config(config: &Config, formatter: &Formatter) -> Result<()> {
    let mut shown = config.clone();
    if shown.provider.api_key.is_some() {
        shown.provider.api_key = Some(REDACTED.to_string());
    }

    let contents = toml::to_string_pretty(&shown)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("{}", contents.trim_end());

    if config.api_key().is_none() {
        println!("{}", formatter.warning("No API key configured"));
    }
    Ok(())
}

/// Set one value and save.
fn set_value(config: &mut Config, path: &Path, key: &str, value: &str, formatter: &Formatter) -> Result<()> {
    config.set(key, value)?;
    config.save_to(path)?;

    let shown = if key.ends_with("api_key") { REDACTED } else { value };
    println!("{}", formatter.success(&format!("Set {} = {}", key, shown)));
    Ok(())
}

/// Write the default configuration.
fn init_config(config: &mut Config, path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{}",
            formatter.warning(&format!("{} already exists (use --force to overwrite)", path.display()))
        );
        return Ok(());
    }

    *config = Config::default();
    config.save_to(path)?;
    println!("{}", formatter.success(&format!("Wrote {}", path.display())));
    Ok(())
}
