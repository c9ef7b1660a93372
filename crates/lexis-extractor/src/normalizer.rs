//! Raw record normalization
//!
//! Turns whatever an extractor found into a canonical [`VocabularyEntry`].
//! Every cleanup step runs to a fixed point, so normalizing an entry that is
//! already normalized changes nothing.

use crate::types::{RawRecord, RawSynonyms};
use lexis_domain::{RecordSchema, VocabularyEntry};

/// Separators the generator uses between synonyms
const SYNONYM_SEPARATORS: [char; 5] = [',', '，', '、', ';', '；'];

/// Markdown emphasis wrappers stripped from field values
const EMPHASIS: [&str; 4] = ["**", "__", "*", "`"];

/// Normalize one raw record
///
/// `word` and `meaning` are never filled in. A placeholder there is cleared
/// like any other, so the entry fails validation downstream.
pub fn normalize(raw: RawRecord) -> VocabularyEntry {
    VocabularyEntry {
        word: raw.word.as_deref().map(clean_optional).unwrap_or_default(),
        pronunciation: raw.pronunciation.as_deref().map(clean_optional).unwrap_or_default(),
        part_of_speech: raw
            .part_of_speech
            .as_deref()
            .map(clean_part_of_speech)
            .unwrap_or_default(),
        meaning: raw.meaning.as_deref().map(clean_optional).unwrap_or_default(),
        example: raw.example.as_deref().map(clean_optional).unwrap_or_default(),
        synonyms: raw.synonyms.map(coerce_synonyms).unwrap_or_default(),
    }
}

/// Trim and strip surrounding markdown emphasis
pub fn clean_text(value: &str) -> String {
    fixed_point(value.trim().to_string(), |current| {
        let mut next = current.trim();
        for marker in EMPHASIS {
            if next.len() > marker.len() * 2 && next.starts_with(marker) && next.ends_with(marker) {
                next = next[marker.len()..next.len() - marker.len()].trim();
                break;
            }
        }
        next.to_string()
    })
}

/// Clean a field; the placeholder becomes an empty string
pub fn clean_optional(value: &str) -> String {
    let cleaned = clean_text(value);
    if RecordSchema::is_placeholder(&cleaned) {
        String::new()
    } else {
        cleaned
    }
}

/// Clean a part-of-speech label
///
/// Underscores become spaces, asterisks and wrapping parentheses are removed,
/// trailing punctuation is dropped and whitespace is collapsed:
/// `"_verb_"` → `"verb"`, `"(measure_word)."` → `"measure word"`.
pub fn clean_part_of_speech(value: &str) -> String {
    fixed_point(value.to_string(), |current| {
        let cleaned = clean_optional(current).replace('_', " ").replace('*', "");
        let mut label = cleaned
            .trim()
            .trim_end_matches(['.', ',', ';', ':', '。', '，'])
            .trim();
        if label.starts_with('(') && label.ends_with(')') && label.len() > 2 {
            label = label[1..label.len() - 1].trim();
        }
        label.split_whitespace().collect::<Vec<_>>().join(" ")
    })
}

/// Coerce any synonym representation into a sequence
///
/// Placeholder and empty values yield an empty sequence.
pub fn coerce_synonyms(raw: RawSynonyms) -> Vec<String> {
    let items: Vec<String> = match raw {
        RawSynonyms::List(items) => items,
        RawSynonyms::Text(text) => {
            let text = clean_text(&text);
            if RecordSchema::is_placeholder(&text) {
                return Vec::new();
            }
            text.split(SYNONYM_SEPARATORS).map(str::to_string).collect()
        }
    };

    items
        .iter()
        .map(|item| clean_text(item))
        .filter(|item| !item.is_empty() && !RecordSchema::is_placeholder(item))
        .collect()
}

fn fixed_point(mut current: String, step: impl Fn(&str) -> String) -> String {
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_every_field() {
        let raw = RawRecord::from_positional([" 你好 ", "\tnǐ hǎo", "interjection ", " hello", " 你好！ ", " 嗨 "]);
        let entry = normalize(raw);
        assert_eq!(entry.word, "你好");
        assert_eq!(entry.pronunciation, "nǐ hǎo");
        assert_eq!(entry.part_of_speech, "interjection");
        assert_eq!(entry.meaning, "hello");
        assert_eq!(entry.example, "你好！");
        assert_eq!(entry.synonyms, vec!["嗨"]);
    }

    #[test]
    fn test_placeholder_synonyms_become_empty() {
        assert!(coerce_synonyms(RawSynonyms::Text("N/A".into())).is_empty());
        assert!(coerce_synonyms(RawSynonyms::Text("n/a".into())).is_empty());
        assert!(coerce_synonyms(RawSynonyms::Text("  ".into())).is_empty());
        assert!(coerce_synonyms(RawSynonyms::List(vec!["N/A".into()])).is_empty());
    }

    #[test]
    fn test_synonym_string_split() {
        assert_eq!(
            coerce_synonyms(RawSynonyms::Text("学, 研习".into())),
            vec!["学", "研习"]
        );
        assert_eq!(
            coerce_synonyms(RawSynonyms::Text("学、研习，念书".into())),
            vec!["学", "研习", "念书"]
        );
        assert_eq!(
            coerce_synonyms(RawSynonyms::Text("学;;研习".into())),
            vec!["学", "研习"]
        );
    }

    #[test]
    fn test_synonym_list_preserved() {
        assert_eq!(
            coerce_synonyms(RawSynonyms::List(vec![" 学 ".into(), "".into(), "研习".into()])),
            vec!["学", "研习"]
        );
    }

    #[test]
    fn test_missing_synonyms_empty() {
        let entry = normalize(RawRecord::from_positional(["我", "wǒ", "pronoun", "I", "我很好。"]));
        assert!(entry.synonyms.is_empty());
    }

    #[test]
    fn test_optional_placeholders_become_empty() {
        let entry = normalize(RawRecord::from_positional(["我", "N/A", "n/a", "I", "N/A", "N/A"]));
        assert_eq!(entry.pronunciation, "");
        assert_eq!(entry.part_of_speech, "");
        assert_eq!(entry.example, "");
    }

    #[test]
    fn test_word_and_meaning_never_invented() {
        let entry = normalize(RawRecord::default());
        assert_eq!(entry.word, "");
        assert_eq!(entry.meaning, "");
        assert!(!RecordSchema::validate(&entry));
    }

    #[test]
    fn test_placeholder_word_or_meaning_cleared() {
        let entry = normalize(RawRecord::from_positional(["我", "wǒ", "pronoun", "N/A", "我很好。", "N/A"]));
        assert_eq!(entry.meaning, "");
        assert!(!RecordSchema::validate(&entry));

        let entry = normalize(RawRecord::from_positional(["**n/a**", "", "", "I", "", ""]));
        assert_eq!(entry.word, "");
    }

    #[test]
    fn test_part_of_speech_cleanup() {
        assert_eq!(clean_part_of_speech("_verb_"), "verb");
        assert_eq!(clean_part_of_speech("**noun**"), "noun");
        assert_eq!(clean_part_of_speech("(measure_word)."), "measure word");
        assert_eq!(clean_part_of_speech("  adjective ,"), "adjective");
        assert_eq!(clean_part_of_speech("(N/A)"), "");
    }

    #[test]
    fn test_emphasis_stripped() {
        assert_eq!(clean_text("**你好**"), "你好");
        assert_eq!(clean_text("`nǐ hǎo`"), "nǐ hǎo");
        assert_eq!(clean_text("***学习***"), "学习");
        assert_eq!(clean_text("*"), "*");
    }

    #[test]
    fn test_bilingual_example_kept_whole() {
        let entry = normalize(RawRecord::from_positional([
            "你好",
            "nǐ hǎo",
            "interjection",
            "hello",
            "你好，世界！ (Hello, world!)",
            "N/A",
        ]));
        assert_eq!(entry.example, "你好，世界！ (Hello, world!)");
    }

    #[test]
    fn test_normalize_is_idempotent_on_example() {
        let entry = normalize(RawRecord::from_positional([
            "**学习**", "xuéxí", "_verb_", "to study", "他学习中文。", "学, 研习",
        ]));
        let again = normalize(RawRecord::from(entry.clone()));
        assert_eq!(entry, again);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raw_record() -> impl Strategy<Value = RawRecord> {
        let field = prop::option::of("[ *_()a-z\u{4e00}-\u{4e10}/.,]{0,12}");
        let synonyms = prop::option::of(prop_oneof![
            "[ a-z\u{4e00}-\u{4e10},、;N/A]{0,12}".prop_map(RawSynonyms::Text),
            prop::collection::vec("[ *a-z\u{4e00}-\u{4e10}]{0,5}", 0..4).prop_map(RawSynonyms::List),
        ]);
        (field.clone(), field.clone(), field.clone(), field.clone(), field, synonyms).prop_map(
            |(word, pronunciation, part_of_speech, meaning, example, synonyms)| RawRecord {
                word,
                pronunciation,
                part_of_speech,
                meaning,
                example,
                synonyms,
            },
        )
    }

    proptest! {
        /// Property: normalizing a normalized entry is a no-op
        #[test]
        fn test_normalize_idempotent(raw in raw_record()) {
            let once = normalize(raw);
            let twice = normalize(RawRecord::from(once.clone()));
            prop_assert_eq!(once, twice);
        }

        /// Property: synonyms never contain empty or placeholder items
        #[test]
        fn test_synonyms_are_clean_items(raw in raw_record()) {
            let entry = normalize(raw);
            for item in &entry.synonyms {
                prop_assert!(!item.is_empty());
                prop_assert!(!RecordSchema::is_placeholder(item));
                prop_assert_eq!(item.trim(), item.as_str());
            }
        }
    }
}
