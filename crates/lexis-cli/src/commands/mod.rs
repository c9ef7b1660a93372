//! Command implementations.

pub mod analyze;
pub mod config;
pub mod parse;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::parse::execute_parse;

use crate::error::Result;
use crate::output::Formatter;
use lexis_domain::VocabularyEntry;
use std::fs::File;
use std::path::Path;

/// Write entries to a CSV file and report where they went.
pub(crate) fn export_csv(entries: &[VocabularyEntry], path: &Path, formatter: &Formatter) -> Result<()> {
    let file = File::create(path)?;
    lexis_extractor::write_csv(entries, file)?;
    eprintln!(
        "{}",
        formatter.success(&format!("Wrote {} entries to {}", entries.len(), path.display()))
    );
    Ok(())
}
