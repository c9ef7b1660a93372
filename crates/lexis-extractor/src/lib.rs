//! Lexis Extractor
//!
//! Turns free-form generator output into validated vocabulary entries.
//!
//! # Overview
//!
//! A text generator asked for "the words of this sentence, with reading,
//! part of speech, meaning, example and synonyms" answers in whatever shape
//! it likes: numbered lines, tab-delimited rows, dash-separated rows or a
//! JSON array. This crate reads all of them into one canonical
//! [`VocabularyEntry`](lexis_domain::VocabularyEntry) shape and never panics
//! on malformed or partial output.
//!
//! # Architecture
//!
//! ```text
//! Sentence → Analyzer → Generator → raw text
//!                                     │
//!            Detector → Extractor → Normalizer → Validator → PipelineOutcome → CSV
//! ```
//!
//! # Key Features
//!
//! - **Format Detection**: Pick one of four extraction grammars per response
//! - **Normalization**: Trim fields, clean markdown, coerce synonyms to a list
//! - **Validation**: Keep only entries with a word and a meaning
//! - **Translation**: Optional full-sentence translation, requested concurrently
//! - **Export**: CSV with a fixed header
//!
//! # Example Usage
//!
//! ```
//! use lexis_extractor::{parse_response, PipelineState};
//!
//! let outcome = parse_response("我\twǒ\tpronoun\tI\t我很好。\tN/A");
//! assert_eq!(outcome.state(), PipelineState::Validated);
//! assert_eq!(outcome.entries()[0].word, "我");
//! assert!(outcome.entries()[0].synonyms.is_empty());
//! ```
//!
//! ```no_run
//! use lexis_extractor::{Analyzer, AnalyzerConfig};
//! use lexis_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(MockProvider::new("[]"), AnalyzerConfig::default());
//! let request = analyzer.request("你好，世界！")?;
//! let result = analyzer.analyze(request).await?;
//!
//! println!("Translation: {:?}", result.translation.text());
//! println!("Entries: {}", result.vocabulary.entries().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod detector;
mod error;
mod export;
mod extractors;
mod normalizer;
mod pipeline;
mod prompt;
mod types;


pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use detector::{detect, Confidence, ResponseFormat};
pub use error::{ExtractionIssue, ExtractorError};
pub use export::{to_csv_string, write_csv, SYNONYM_SEPARATOR};
pub use extractors::{
    strategy_for, DelimitedLineExtractor, ExtractStrategy, JsonArrayExtractor,
    LooseLineExtractor, NumberedListExtractor,
};
pub use normalizer::normalize;
pub use pipeline::{parse_response, Pipeline, PipelineOutcome, PipelineState, ValidatedBatch};
pub use prompt::PromptBuilder;
pub use types::{
    AnalysisMetadata, AnalysisRequest, AnalysisResult, Extraction, Field, RawRecord,
    RawSynonyms, Translation,
};
