//! Request, response and intermediate record types

use crate::pipeline::PipelineOutcome;
use lexis_domain::{Language, VocabularyEntry};

/// One of the six canonical record positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Source-language token
    Word,
    /// Romanized reading
    Pronunciation,
    /// Grammatical category
    PartOfSpeech,
    /// Meaning in the target language
    Meaning,
    /// Usage sentence
    Example,
    /// Related words
    Synonyms,
}

impl Field {
    /// All fields in canonical order
    pub const ALL: [Field; 6] = [
        Field::Word,
        Field::Pronunciation,
        Field::PartOfSpeech,
        Field::Meaning,
        Field::Example,
        Field::Synonyms,
    ];

    /// Field at a zero-based canonical position
    pub fn at(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Resolve a generator-chosen label or JSON key to a field
    ///
    /// Matching ignores case, spaces, underscores and hyphens, so
    /// `part_of_speech`, `partOfSpeech` and `Part of Speech` all resolve to
    /// [`Field::PartOfSpeech`].
    pub fn from_label(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "word" | "words" | "chinese" | "chineseword" | "hanzi" | "term" | "vocabulary"
            | "vocab" | "character" | "characters" | "simplified" => Some(Field::Word),
            "pronunciation" | "pinyin" | "reading" | "romanization" | "romanisation"
            | "transliteration" | "romaji" => Some(Field::Pronunciation),
            "partofspeech" | "pos" | "wordtype" | "wordclass" | "type" | "category"
            | "grammaticalcategory" => Some(Field::PartOfSpeech),
            "meaning" | "meanings" | "translation" | "definition" | "english" | "gloss" => {
                Some(Field::Meaning)
            }
            "example" | "examples" | "exampleusage" | "examplesentence" | "usage"
            | "usageexample" | "sentence" => Some(Field::Example),
            "synonyms" | "synonym" | "similarwords" | "relatedwords" => Some(Field::Synonyms),
            _ => None,
        }
    }
}

/// Synonyms as the extractor found them, before coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSynonyms {
    /// A delimited string such as `"学, 研习"` or `"N/A"`
    Text(String),
    /// An already-split sequence
    List(Vec<String>),
}

/// Six optional positions read from one record in a response
///
/// Extractors fill whatever they can find; the normalizer decides what the
/// canonical entry looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Word position
    pub word: Option<String>,
    /// Pronunciation position
    pub pronunciation: Option<String>,
    /// Part of speech position
    pub part_of_speech: Option<String>,
    /// Meaning position
    pub meaning: Option<String>,
    /// Example position
    pub example: Option<String>,
    /// Synonyms position
    pub synonyms: Option<RawSynonyms>,
}

impl RawRecord {
    /// Build a record from values in canonical order; extras are ignored
    pub fn from_positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for (field, value) in Field::ALL.into_iter().zip(values) {
            record.set(field, value.into());
        }
        record
    }

    /// Set a field's raw text, replacing any previous value
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Word => self.word = Some(value),
            Field::Pronunciation => self.pronunciation = Some(value),
            Field::PartOfSpeech => self.part_of_speech = Some(value),
            Field::Meaning => self.meaning = Some(value),
            Field::Example => self.example = Some(value),
            Field::Synonyms => self.synonyms = Some(RawSynonyms::Text(value)),
        }
    }

    /// Whether a field already holds a value
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Word => self.word.is_some(),
            Field::Pronunciation => self.pronunciation.is_some(),
            Field::PartOfSpeech => self.part_of_speech.is_some(),
            Field::Meaning => self.meaning.is_some(),
            Field::Example => self.example.is_some(),
            Field::Synonyms => self.synonyms.is_some(),
        }
    }
}

impl From<VocabularyEntry> for RawRecord {
    fn from(entry: VocabularyEntry) -> Self {
        Self {
            word: Some(entry.word),
            pronunciation: Some(entry.pronunciation),
            part_of_speech: Some(entry.part_of_speech),
            meaning: Some(entry.meaning),
            example: Some(entry.example),
            synonyms: Some(RawSynonyms::List(entry.synonyms)),
        }
    }
}

/// Records read by one extractor pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in the order they appeared
    pub records: Vec<RawRecord>,

    /// Lines, blocks or elements that looked like records but were unreadable
    pub skipped: usize,
}

/// Request to analyze one source sentence
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Sentence to analyze
    pub text: String,

    /// Language of the sentence
    pub source_language: Language,

    /// Language for meanings and the translation
    pub target_language: Language,

    /// Whether to also request a full-sentence translation
    pub translate: bool,
}

impl AnalysisRequest {
    /// Request analysis of a Chinese sentence into `target_language`
    pub fn new(text: impl Into<String>, target_language: Language) -> Self {
        Self {
            text: text.into(),
            source_language: Language::Chinese,
            target_language,
            translate: true,
        }
    }

    /// Set the source language
    pub fn with_source_language(mut self, language: Language) -> Self {
        self.source_language = language;
        self
    }

    /// Enable or disable the translation request
    pub fn with_translation(mut self, translate: bool) -> Self {
        self.translate = translate;
        self
    }
}

/// Outcome of the translation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Translation was not requested
    Skipped,
    /// Translated text
    Translated(String),
    /// The generation call failed; the vocabulary step is unaffected
    Failed(String),
}

impl Translation {
    /// Translated text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Translation::Translated(text) => Some(text),
            _ => None,
        }
    }
}

/// Result of an analysis operation
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Full-sentence translation
    pub translation: Translation,

    /// Vocabulary pipeline outcome
    pub vocabulary: PipelineOutcome,

    /// Raw vocabulary response, as returned by the generator
    pub raw_response: String,

    /// Metadata about the analysis
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis operation
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Name of the model used
    pub model_name: String,

    /// Source language
    pub source_language: Language,

    /// Target language
    pub target_language: Language,

    /// Timestamp when analysis finished (seconds since the Unix epoch)
    pub timestamp: u64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
