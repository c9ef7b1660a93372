//! Extraction grammars, one per response shape
//!
//! Every extractor reads raw field tuples out of a response and never fails on
//! malformed input: unreadable records are omitted and counted. The JSON
//! extractor is the one exception, because choosing it means the response
//! committed to a structure it then violated.

pub(crate) mod delimited;
pub(crate) mod json;
pub(crate) mod loose;
pub(crate) mod numbered;

use crate::detector::ResponseFormat;
use crate::error::ExtractionIssue;
use crate::types::Extraction;

pub use delimited::DelimitedLineExtractor;
pub use json::JsonArrayExtractor;
pub use loose::LooseLineExtractor;
pub use numbered::NumberedListExtractor;

/// A grammar that reads raw records out of one response shape
pub trait ExtractStrategy: Send + Sync {
    /// Returns the name of this strategy for logging
    fn name(&self) -> &'static str;

    /// Read every record this grammar can find, in order of appearance
    fn extract(&self, text: &str) -> Result<Extraction, ExtractionIssue>;
}

/// The extractor for a detected format
pub fn strategy_for(format: ResponseFormat) -> &'static dyn ExtractStrategy {
    match format {
        ResponseFormat::Json => &JsonArrayExtractor,
        ResponseFormat::Delimited => &DelimitedLineExtractor,
        ResponseFormat::NumberedList => &NumberedListExtractor,
        ResponseFormat::Loose => &LooseLineExtractor,
    }
}
