//! Lexis Domain Layer
//!
//! This crate contains the canonical vocabulary model for Lexis. It has ZERO
//! external dependencies and defines the record shape, its validation rules and
//! the trait boundary to the text-generation service that all other layers
//! depend upon.
//!
//! ## Key Concepts
//!
//! - **VocabularyEntry**: The canonical unit - one word with its reading, part
//!   of speech, meaning, example usage and synonyms
//! - **RecordSchema**: Field names, the validity predicate and the "N/A"
//!   placeholder the generator uses for missing values
//! - **Language**: Source and target language identifiers for prompts
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and validation only
//! - The generation call is a trait; implementations live in `lexis-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod language;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use entry::VocabularyEntry;
pub use language::Language;
pub use schema::RecordSchema;
