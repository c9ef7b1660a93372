//! Record schema - canonical field names and validation rules

use crate::VocabularyEntry;

/// The canonical vocabulary record shape.
///
/// A record is valid iff `word` and `meaning` are both non-empty after
/// trimming. All other fields are optional and may be empty.
pub struct RecordSchema;

impl RecordSchema {
    /// Canonical field names, in export order
    pub const FIELDS: [&'static str; 6] = [
        "word",
        "pronunciation",
        "partOfSpeech",
        "meaning",
        "example",
        "synonyms",
    ];

    /// Number of canonical fields
    pub const FIELD_COUNT: usize = Self::FIELDS.len();

    /// Sentinel the generator uses for "not available"
    pub const PLACEHOLDER: &'static str = "N/A";

    /// Check whether an entry satisfies the record invariants
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_domain::{RecordSchema, VocabularyEntry};
    ///
    /// assert!(RecordSchema::validate(&VocabularyEntry::new("我", "I")));
    /// assert!(!RecordSchema::validate(&VocabularyEntry::new("我", "  ")));
    /// ```
    pub fn validate(entry: &VocabularyEntry) -> bool {
        !entry.word.trim().is_empty() && !entry.meaning.trim().is_empty()
    }

    /// Check whether a raw value is one of the generator's spellings of the
    /// placeholder
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn is_placeholder(value: &str) -> bool {
        let value = value.trim();
        if value.eq_ignore_ascii_case(Self::PLACEHOLDER) {
            return true;
        }
        matches!(
            value.to_ascii_lowercase().as_str(),
            "na" | "n.a." | "n/a." | "none" | "-" | "—" | "–"
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: validity depends only on trimmed word and meaning
        #[test]
        fn test_validity_ignores_padding(
            word in "[a-z\u{4e00}-\u{4e20}]{0,4}",
            meaning in "[a-z ]{0,6}",
            pad in "[ \t]{0,3}",
        ) {
            let padded = VocabularyEntry::new(
                format!("{pad}{word}{pad}"),
                format!("{pad}{meaning}{pad}"),
            );
            let expected = !word.trim().is_empty() && !meaning.trim().is_empty();
            prop_assert_eq!(RecordSchema::validate(&padded), expected);
        }

        /// Property: synonyms never affect validity
        #[test]
        fn test_synonyms_do_not_affect_validity(synonyms in proptest::collection::vec("[a-z]{0,3}", 0..4)) {
            let entry = VocabularyEntry::new("我", "I").with_synonyms(synonyms);
            prop_assert!(RecordSchema::validate(&entry));
        }
    }
}
