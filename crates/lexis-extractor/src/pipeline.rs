//! Detect → extract → normalize → validate
//!
//! The pipeline is deterministic given its input and never panics on
//! generator output. Its only hard failure is a response that committed to
//! JSON and then broke it; everything else degrades to fewer entries.

use crate::detector::{self, Confidence, ResponseFormat};
use crate::error::ExtractionIssue;
use crate::extractors::strategy_for;
use crate::normalizer::normalize;
use lexis_domain::{RecordSchema, VocabularyEntry};
use tracing::{debug, info, warn};

/// Pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Choosing an extraction grammar
    Detecting,
    /// Reading raw records
    Extracting,
    /// Normalizing and validating records
    Normalizing,
    /// Finished with zero or more entries
    Validated,
    /// Finished with a hard failure
    Failed,
}

/// Entries accepted from one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBatch {
    /// Valid entries in response order
    pub entries: Vec<VocabularyEntry>,

    /// Format the response was read as
    pub format: ResponseFormat,

    /// Lines, blocks or elements the extractor could not read
    pub skipped: usize,

    /// Records rejected by validation
    pub dropped: usize,
}

impl ValidatedBatch {
    /// Detector confidence for the chosen format
    pub fn confidence(&self) -> Confidence {
        self.format.confidence()
    }

    /// Non-fatal problems worth reporting to the caller
    pub fn issues(&self) -> Vec<ExtractionIssue> {
        let mut issues = Vec::new();
        if self.entries.is_empty() {
            issues.push(ExtractionIssue::NoRecordsExtracted);
        }
        if self.skipped > 0 || self.dropped > 0 {
            issues.push(ExtractionIssue::PartialExtraction {
                skipped: self.skipped,
                dropped: self.dropped,
            });
        }
        issues
    }
}

/// Terminal pipeline result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Zero or more valid entries
    Validated(ValidatedBatch),

    /// The vocabulary step failed; carries no entries
    Failed {
        /// Format the response was read as
        format: ResponseFormat,
        /// Why it failed
        error: ExtractionIssue,
    },
}

impl PipelineOutcome {
    /// Terminal state of this outcome
    pub fn state(&self) -> PipelineState {
        match self {
            PipelineOutcome::Validated(_) => PipelineState::Validated,
            PipelineOutcome::Failed { .. } => PipelineState::Failed,
        }
    }

    /// Accepted entries; empty for a failed outcome
    pub fn entries(&self) -> &[VocabularyEntry] {
        match self {
            PipelineOutcome::Validated(batch) => &batch.entries,
            PipelineOutcome::Failed { .. } => &[],
        }
    }

    /// Consume the outcome, keeping only its entries
    pub fn into_entries(self) -> Vec<VocabularyEntry> {
        match self {
            PipelineOutcome::Validated(batch) => batch.entries,
            PipelineOutcome::Failed { .. } => Vec::new(),
        }
    }

    /// Format the response was read as
    pub fn format(&self) -> ResponseFormat {
        match self {
            PipelineOutcome::Validated(batch) => batch.format,
            PipelineOutcome::Failed { format, .. } => *format,
        }
    }

    /// The fatal error, if the outcome failed
    pub fn error(&self) -> Option<&ExtractionIssue> {
        match self {
            PipelineOutcome::Validated(_) => None,
            PipelineOutcome::Failed { error, .. } => Some(error),
        }
    }

    /// Whether the outcome failed
    pub fn is_failed(&self) -> bool {
        self.state() == PipelineState::Failed
    }

    /// Fatal error or non-fatal issues, whichever apply
    pub fn issues(&self) -> Vec<ExtractionIssue> {
        match self {
            PipelineOutcome::Validated(batch) => batch.issues(),
            PipelineOutcome::Failed { error, .. } => vec![error.clone()],
        }
    }
}

/// Orchestrates one response through every stage
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    format_override: Option<ResponseFormat>,
}

impl Pipeline {
    /// Create a pipeline that detects the response format
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every response as `format`, skipping detection
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format_override = Some(format);
        self
    }

    /// Run one response through the pipeline
    pub fn run(&self, text: &str) -> PipelineOutcome {
        debug!(state = ?PipelineState::Detecting, "Response length: {} chars", text.len());
        let format = self.format_override.unwrap_or_else(|| detector::detect(text));

        debug!(state = ?PipelineState::Extracting, "Reading response as {}", format);
        let extraction = match strategy_for(format).extract(text) {
            Ok(extraction) => extraction,
            Err(error) => {
                warn!(state = ?PipelineState::Failed, "Extraction failed: {}", error);
                return PipelineOutcome::Failed { format, error };
            }
        };

        debug!(
            state = ?PipelineState::Normalizing,
            "Normalizing {} raw records",
            extraction.records.len()
        );
        let mut entries = Vec::with_capacity(extraction.records.len());
        let mut dropped = 0;
        for (idx, raw) in extraction.records.into_iter().enumerate() {
            let entry = normalize(raw);
            if RecordSchema::validate(&entry) {
                entries.push(entry);
            } else {
                debug!("Record {} failed validation: word or meaning is empty", idx);
                dropped += 1;
            }
        }

        let batch = ValidatedBatch {
            entries,
            format,
            skipped: extraction.skipped,
            dropped,
        };

        if batch.confidence() == Confidence::Low && !batch.entries.is_empty() {
            debug!("Entries read with the fallback grammar; results are best-effort");
        }
        info!(
            "Parsed {} vocabulary entries ({} format, {} skipped, {} dropped)",
            batch.entries.len(),
            format,
            batch.skipped,
            batch.dropped
        );

        PipelineOutcome::Validated(batch)
    }
}

/// Run a response through a detecting pipeline
pub fn parse_response(text: &str) -> PipelineOutcome {
    Pipeline::new().run(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_validated() {
        let outcome = parse_response("");
        assert_eq!(outcome.state(), PipelineState::Validated);
        assert!(outcome.entries().is_empty());
        assert_eq!(outcome.issues(), vec![ExtractionIssue::NoRecordsExtracted]);
    }

    #[test]
    fn test_malformed_json_fails() {
        let outcome = parse_response("[{word: 学习");
        assert_eq!(outcome.state(), PipelineState::Failed);
        assert_eq!(outcome.format(), ResponseFormat::Json);
        assert!(outcome.entries().is_empty());
        assert!(matches!(
            outcome.error(),
            Some(ExtractionIssue::MalformedStructuredOutput(_))
        ));
    }

    #[test]
    fn test_invalid_records_dropped() {
        let text = r#"[{"word":"我","meaning":"I"},{"word":"","meaning":"nothing"},{"word":"你"}]"#;
        let PipelineOutcome::Validated(batch) = parse_response(text) else {
            panic!("expected validated outcome");
        };
        assert_eq!(batch.entries.len(), 1);
        assert_eq!(batch.dropped, 2);
        assert_eq!(
            batch.issues(),
            vec![ExtractionIssue::PartialExtraction { skipped: 0, dropped: 2 }]
        );
    }

    #[test]
    fn test_placeholder_meaning_dropped() {
        let PipelineOutcome::Validated(batch) = parse_response("我\twǒ\tpronoun\tN/A\t我很好。\tN/A") else {
            panic!("expected validated outcome");
        };
        assert!(batch.entries.is_empty());
        assert_eq!(batch.dropped, 1);
        assert_eq!(
            batch.issues(),
            vec![
                ExtractionIssue::NoRecordsExtracted,
                ExtractionIssue::PartialExtraction { skipped: 0, dropped: 1 }
            ]
        );
    }

    #[test]
    fn test_order_preserved() {
        let text = "我\twǒ\tpronoun\tI\t我很好。\tN/A\n你\tnǐ\tpronoun\tyou\t你好。\tN/A\n他\ttā\tpronoun\the\t他来了。\tN/A";
        let words: Vec<_> = parse_response(text)
            .into_entries()
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, vec!["我", "你", "他"]);
    }

    #[test]
    fn test_format_override() {
        let text = "我 - wǒ - pronoun - I - 我很好。";
        let outcome = Pipeline::new().with_format(ResponseFormat::Delimited).run(text);
        assert_eq!(outcome.format(), ResponseFormat::Delimited);
        assert!(outcome.entries().is_empty());

        let outcome = Pipeline::new().run(text);
        assert_eq!(outcome.format(), ResponseFormat::Loose);
        assert_eq!(outcome.entries().len(), 1);
    }

    #[test]
    fn test_loose_confidence_is_low() {
        let PipelineOutcome::Validated(batch) = parse_response("我 - wǒ - pronoun - I - 我很好。") else {
            panic!("expected validated outcome");
        };
        assert_eq!(batch.confidence(), Confidence::Low);
        assert!(batch.issues().is_empty());
    }

    #[test]
    fn test_clean_batch_has_no_issues() {
        let outcome = parse_response("我\twǒ\tpronoun\tI\t我很好。\tN/A");
        assert!(outcome.issues().is_empty());
        assert!(!outcome.is_failed());
    }
}
