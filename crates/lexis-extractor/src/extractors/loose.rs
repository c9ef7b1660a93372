//! Dash-separated fallback
//!
//! `word - pinyin - part of speech - meaning - example[ - synonyms]`, one
//! word per line. Used when no structural probe matched, so lines without any
//! dash separator are treated as prose and ignored rather than counted.

use super::ExtractStrategy;
use crate::error::ExtractionIssue;
use crate::types::{Extraction, RawRecord};
use lexis_domain::RecordSchema;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Minimum segments for a line to count as a record
const MIN_SEGMENTS: usize = 5;

/// A dash (hyphen, en or em) with whitespace on both sides
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-–—]\s+").expect("separator pattern is valid"));

/// Leading bullet or ordinal (`- `, `* `, `• `, `3. `, `3) `)
static LEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•]\s+|\d+[.)]\s+)").expect("leader pattern is valid")
});

/// Best-effort line splitter for unrecognized responses
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseLineExtractor;

impl ExtractStrategy for LooseLineExtractor {
    fn name(&self) -> &'static str {
        "loose"
    }

    fn extract(&self, text: &str) -> Result<Extraction, ExtractionIssue> {
        let mut extraction = Extraction::default();

        for (line_no, line) in text.lines().enumerate() {
            let body = LEADER.replace(line, "");
            let body = body.trim();
            if body.is_empty() {
                continue;
            }

            let mut segments: Vec<&str> = SEPARATOR.split(body).collect();

            if segments.len() < MIN_SEGMENTS {
                if segments.len() > 1 {
                    debug!(
                        "Skipping line {}: {} segments (need {})",
                        line_no + 1,
                        segments.len(),
                        MIN_SEGMENTS
                    );
                    extraction.skipped += 1;
                }
                continue;
            }

            if segments.len() == MIN_SEGMENTS {
                segments.push(RecordSchema::PLACEHOLDER);
            }
            segments.truncate(RecordSchema::FIELD_COUNT);

            extraction.records.push(RawRecord::from_positional(segments));
        }

        Ok(extraction)
    }
}
