//! Tab-delimited row responses

use super::ExtractStrategy;
use crate::error::ExtractionIssue;
use crate::types::{Extraction, Field, RawRecord};
use lexis_domain::RecordSchema;
use tracing::debug;

/// Minimum fields per line for the detector to consider a response delimited
pub(crate) const MIN_DETECT_FIELDS: usize = 5;

/// Reads one record per tab-separated line
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedLineExtractor;

impl ExtractStrategy for DelimitedLineExtractor {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn extract(&self, text: &str) -> Result<Extraction, ExtractionIssue> {
        let mut extraction = Extraction::default();
        let mut first_row = true;

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();

            if first_row {
                first_row = false;
                if is_header(&fields) {
                    debug!("Skipping header row at line {}", line_no + 1);
                    continue;
                }
            }

            if fields.len() < RecordSchema::FIELD_COUNT {
                debug!(
                    "Skipping line {}: {} fields (need {})",
                    line_no + 1,
                    fields.len(),
                    RecordSchema::FIELD_COUNT
                );
                extraction.skipped += 1;
                continue;
            }

            extraction
                .records
                .push(RawRecord::from_positional(fields.into_iter().take(RecordSchema::FIELD_COUNT)));
        }

        Ok(extraction)
    }
}

/// Whether every non-blank line is a tab-separated row of enough fields
pub(crate) fn looks_delimited(text: &str) -> bool {
    let mut rows = text.lines().filter(|line| !line.trim().is_empty()).peekable();
    if rows.peek().is_none() {
        return false;
    }
    rows.all(|line| line.contains('\t') && line.split('\t').count() >= MIN_DETECT_FIELDS)
}

/// A row made of column titles rather than values
fn is_header(fields: &[&str]) -> bool {
    let titled = fields
        .iter()
        .filter(|field| Field::from_label(field).is_some())
        .count();
    titled >= 3 && Field::from_label(fields[0]) == Some(Field::Word)
}
