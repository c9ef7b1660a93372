//! Error types for the Extractor

use thiserror::Error;

/// Problems found while turning a response into vocabulary entries
///
/// These are values carried by a pipeline outcome, never raised: only
/// `MalformedStructuredOutput` fails the vocabulary step, the other two are
/// reported alongside a successful result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionIssue {
    /// The response committed to JSON but could not be parsed as a JSON array
    #[error("Malformed structured output: {0}")]
    MalformedStructuredOutput(String),

    /// Parsing completed but no valid entry resulted
    #[error("No vocabulary records extracted")]
    NoRecordsExtracted,

    /// Some lines or records were skipped or failed validation
    #[error("Partial extraction: {skipped} skipped, {dropped} dropped")]
    PartialExtraction {
        /// Lines or elements the extractor could not read
        skipped: usize,
        /// Records rejected by validation
        dropped: usize,
    },
}

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Generation provider error
    #[error("Generation error: {0}")]
    Generation(String),

    /// Input text is empty
    #[error("Input text is empty")]
    EmptyInput,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Generation call timed out
    #[error("Generation timeout")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV export error
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for ExtractorError {
    fn from(e: csv::Error) -> Self {
        ExtractorError::Export(e.to_string())
    }
}

impl From<std::io::Error> for ExtractorError {
    fn from(e: std::io::Error) -> Self {
        ExtractorError::Export(e.to_string())
    }
}
