//! Vocabulary entry - the canonical unit of an analysis batch

/// One vocabulary record extracted from a generator response.
///
/// Entries are produced fresh for every analysis request and carry no
/// identity: two entries with the same field values are the same entry.
///
/// # Examples
///
/// ```
/// use lexis_domain::VocabularyEntry;
///
/// let entry = VocabularyEntry::new("你好", "hello")
///     .with_pronunciation("nǐ hǎo")
///     .with_part_of_speech("interjection")
///     .with_synonyms(["嗨"]);
///
/// assert_eq!(entry.word, "你好");
/// assert_eq!(entry.synonyms, vec!["嗨".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// The source-language token
    pub word: String,

    /// Romanized reading (pinyin); empty when the generator omitted it
    pub pronunciation: String,

    /// Free-form grammatical category label
    pub part_of_speech: String,

    /// Meaning in the requested target language
    pub meaning: String,

    /// Usage sentence, possibly with a parenthesized translation
    pub example: String,

    /// Ordered synonyms; empty when none are available
    pub synonyms: Vec<String>,
}

impl VocabularyEntry {
    /// Create an entry with the two required fields set
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            ..Self::default()
        }
    }

    /// Set the pronunciation
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    /// Set the part of speech
    pub fn with_part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = part_of_speech.into();
        self
    }

    /// Set the example usage
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Set the synonyms
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Synonyms joined into a single display string
    pub fn synonyms_joined(&self, separator: &str) -> String {
        self.synonyms.join(separator)
    }

    /// Field values in export order, synonyms joined with `separator`
    pub fn to_row(&self, separator: &str) -> [String; 6] {
        [
            self.word.clone(),
            self.pronunciation.clone(),
            self.part_of_speech.clone(),
            self.meaning.clone(),
            self.example.clone(),
            self.synonyms_joined(separator),
        ]
    }
}
