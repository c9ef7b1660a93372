//! Prompts for the translation and vocabulary requests

use lexis_domain::{Language, RecordSchema};

/// Builds the two prompts issued for one source sentence
pub struct PromptBuilder {
    text: String,
    source: Language,
    target: Language,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>, source: Language, target: Language) -> Self {
        Self {
            text: text.into(),
            source,
            target,
        }
    }

    /// Build the full-sentence translation prompt
    pub fn build_translation(&self) -> String {
        format!(
            "Translate the following {} sentence into {}: {}",
            self.source.name(),
            self.target.name(),
            self.text.trim()
        )
    }

    /// Build the vocabulary analysis prompt
    pub fn build_vocabulary(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Analyze the following {} sentence. Extract all words and, for each word, \
             provide exactly these six numbered lines:\n",
            self.source.name()
        ));
        prompt.push_str(&format!("1. Word: the word in {}\n", self.source.name()));
        prompt.push_str(&format!(
            "2. {}: the romanized pronunciation\n",
            self.reading_label()
        ));
        prompt.push_str("3. Part of Speech: e.g. noun, verb, adjective\n");
        prompt.push_str(&format!("4. Meaning: the meaning in {}\n", self.target.name()));
        prompt.push_str(&format!(
            "5. Example Usage: an example sentence using the word, followed by its {} translation in parentheses\n",
            self.target.name()
        ));
        prompt.push_str(&format!(
            "6. Synonyms: comma-separated synonyms, or {} if there are none\n\n",
            RecordSchema::PLACEHOLDER
        ));
        prompt.push_str(OUTPUT_RULES);
        prompt.push_str("\n\nSentence: ");
        prompt.push_str(self.text.trim());
        prompt.push('\n');

        prompt
    }

    /// Label for the pronunciation line
    fn reading_label(&self) -> &'static str {
        match self.source {
            Language::Chinese => "Pinyin",
            Language::Japanese => "Romaji",
            _ => "Pronunciation",
        }
    }
}

const OUTPUT_RULES: &str = "Rules:
- Keep the six lines in this order for every word
- Separate words with a blank line
- Use N/A for any value that does not apply
- Do not add headings, explanations or any other text";
