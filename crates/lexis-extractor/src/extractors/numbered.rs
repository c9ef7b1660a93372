//! Numbered-list responses
//!
//! Each word arrives as six lines `1.` to `6.` (or `1)` to `6)`), one per
//! field. When every line carries a label and the six labels name six
//! different fields, the labels decide where values go, so a generator that
//! puts Meaning before Part of Speech is still read correctly. Otherwise the
//! line number decides the field in canonical order.

use super::ExtractStrategy;
use crate::error::ExtractionIssue;
use crate::types::{Extraction, Field, RawRecord};
use lexis_domain::RecordSchema;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// `N. Label : value` with an optional, loosely-spelled label
static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<n>[1-6])[.)]\s*(?:\*{0,2}(?P<label>[A-Za-z][A-Za-z ()/_\-]*?)\*{0,2}\s*[:：]\s*\*{0,2})?\s*(?P<value>.*?)\s*$",
    )
    .expect("field line pattern is valid")
});

/// Reads blocks of six consecutive numbered lines
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedListExtractor;

/// One matched `N.` line
struct FieldLine<'a> {
    number: usize,
    label: Option<&'a str>,
    value: &'a str,
}

fn parse_line(line: &str) -> Option<FieldLine<'_>> {
    let caps = FIELD_LINE.captures(line)?;
    let number = caps.name("n")?.as_str().parse().ok()?;
    Some(FieldLine {
        number,
        label: caps.name("label").map(|m| m.as_str()),
        value: caps.name("value").map_or("", |m| m.as_str()),
    })
}

/// Strip a known field label written without a colon (`Word 你好`)
///
/// Tries the longest leading run of up to three words first, so
/// `Example Usage 你好` loses both label words.
fn strip_bare_label(value: &str, field: Field) -> &str {
    let mut candidates = Vec::new();
    let mut label = String::new();
    let mut rest = value.trim_start();
    for _ in 0..3 {
        let Some((word, tail)) = rest.split_once(char::is_whitespace) else {
            break;
        };
        if !label.is_empty() {
            label.push(' ');
        }
        label.push_str(word);
        rest = tail.trim_start();
        candidates.push((label.clone(), rest));
    }

    candidates
        .into_iter()
        .rev()
        .find(|(label, rest)| !rest.is_empty() && Field::from_label(label) == Some(field))
        .map(|(_, rest)| rest.trim_start_matches(['-', '–', '—']).trim_start())
        .unwrap_or(value)
}

/// Block of field values being assembled
#[derive(Default)]
struct OpenBlock {
    values: Vec<String>,
    labels: Vec<Option<Field>>,
}

impl OpenBlock {
    fn push(&mut self, line: &FieldLine<'_>) {
        let field = Field::at(self.values.len()).unwrap_or(Field::Synonyms);
        let value = match line.label {
            Some(_) => line.value,
            None => strip_bare_label(line.value, field),
        };
        self.values.push(value.to_string());
        self.labels.push(line.label.and_then(Field::from_label));
    }

    fn continue_last(&mut self, text: &str) {
        if let Some(last) = self.values.last_mut() {
            if !last.is_empty() {
                last.push(' ');
            }
            last.push_str(text.trim());
        }
    }

    fn is_complete(&self) -> bool {
        self.values.len() == RecordSchema::FIELD_COUNT
    }

    /// Place values by label when all six labels name distinct fields,
    /// otherwise by line number
    fn into_record(self) -> RawRecord {
        let labelled: Option<Vec<Field>> = self.labels.into_iter().collect();
        if let Some(fields) = labelled {
            let distinct: HashSet<Field> = fields.iter().copied().collect();
            if distinct.len() == RecordSchema::FIELD_COUNT {
                let mut record = RawRecord::default();
                for (field, value) in fields.into_iter().zip(self.values) {
                    record.set(field, value);
                }
                return record;
            }
        }
        RawRecord::from_positional(self.values)
    }
}

/// Emit the open block if all six fields have arrived
fn close_complete(open: &mut Option<OpenBlock>, extraction: &mut Extraction) {
    if open.as_ref().is_some_and(OpenBlock::is_complete) {
        if let Some(block) = open.take() {
            extraction.records.push(block.into_record());
        }
    }
}

impl ExtractStrategy for NumberedListExtractor {
    fn name(&self) -> &'static str {
        "numbered"
    }

    fn extract(&self, text: &str) -> Result<Extraction, ExtractionIssue> {
        let mut extraction = Extraction::default();
        let mut open: Option<OpenBlock> = None;

        for (line_no, line) in text.lines().enumerate() {
            // A finished block stays open for indented wrapped lines only
            if line.trim().is_empty() {
                close_complete(&mut open, &mut extraction);
                continue;
            }

            let Some(field_line) = parse_line(line) else {
                if !line.starts_with(char::is_whitespace) {
                    close_complete(&mut open, &mut extraction);
                }
                // Wrapped values continue the previous field
                if let Some(block) = open.as_mut() {
                    block.continue_last(line);
                }
                continue;
            };

            close_complete(&mut open, &mut extraction);
            let expected = open.as_ref().map_or(1, |block| block.values.len() + 1);

            if field_line.number == expected {
                let block = open.get_or_insert_with(OpenBlock::default);
                block.push(&field_line);
            } else {
                if open.take().is_some() {
                    debug!(
                        "Abandoning incomplete block at line {}: expected {}., found {}.",
                        line_no + 1,
                        expected,
                        field_line.number
                    );
                    extraction.skipped += 1;
                }
                if field_line.number == 1 {
                    let mut block = OpenBlock::default();
                    block.push(&field_line);
                    open = Some(block);
                }
            }
        }

        close_complete(&mut open, &mut extraction);
        if open.is_some() {
            debug!("Discarding trailing incomplete block");
            extraction.skipped += 1;
        }

        Ok(extraction)
    }
}

/// Whether markers `1` to `6` appear in order on consecutive marker lines
pub(crate) fn has_complete_sequence(text: &str) -> bool {
    let mut expected = 1;
    for line in text.lines() {
        let Some(field_line) = parse_line(line) else {
            continue;
        };
        expected = if field_line.number == expected {
            expected + 1
        } else if field_line.number == 1 {
            2
        } else {
            1
        };
        if expected > RecordSchema::FIELD_COUNT {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawSynonyms;

    const HELLO: &str = "1. Word : 你好\n2. Pinyin : nǐ hǎo\n3. Part of Speech : interjection\n4. Meaning : hello\n5. Example Usage : 你好，世界！\n6. Synonyms : 嗨";

    fn extract(text: &str) -> Extraction {
        NumberedListExtractor.extract(text).unwrap()
    }

    #[test]
    fn test_single_block() {
        let extraction = extract(HELLO);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.skipped, 0);

        let record = &extraction.records[0];
        assert_eq!(record.word.as_deref(), Some("你好"));
        assert_eq!(record.pronunciation.as_deref(), Some("nǐ hǎo"));
        assert_eq!(record.part_of_speech.as_deref(), Some("interjection"));
        assert_eq!(record.meaning.as_deref(), Some("hello"));
        assert_eq!(record.example.as_deref(), Some("你好，世界！"));
        assert_eq!(record.synonyms, Some(RawSynonyms::Text("嗨".to_string())));
    }

    #[test]
    fn test_multiple_blocks_with_headings() {
        let text = format!(
            "Here is the analysis:\n\nWord 1:\n{}\n\nWord 2:\n1. Word: 世界\n2. Pinyin: shìjiè\n3. Part of Speech: noun\n4. Meaning: world\n5. Example Usage: 世界很大。\n6. Synonyms: N/A",
            HELLO
        );
        let extraction = extract(&text);
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.skipped, 0);
        assert_eq!(extraction.records[1].word.as_deref(), Some("世界"));
    }

    #[test]
    fn test_label_variants() {
        let text = "1) **Word**: 学习\n2) pinyin：xuéxí\n3) POS - verb\n4) MEANING: to study\n5) Example: 他学习中文。\n6) Similar words: 学, 研习";
        let record = &extract(text).records[0];
        assert_eq!(record.word.as_deref(), Some("学习"));
        assert_eq!(record.pronunciation.as_deref(), Some("xuéxí"));
        assert_eq!(record.meaning.as_deref(), Some("to study"));
        assert_eq!(
            record.synonyms,
            Some(RawSynonyms::Text("学, 研习".to_string()))
        );
    }

    #[test]
    fn test_bold_label_with_inner_colon() {
        let text = "1. **Word:** 学习\n2. **Pinyin:** xuéxí\n3. **Part of Speech:** verb\n4. **Meaning:** to study\n5. **Example Usage:** 他学习中文。\n6. **Synonyms:** N/A";
        let record = &extract(text).records[0];
        assert_eq!(record.word.as_deref(), Some("学习"));
        assert_eq!(record.part_of_speech.as_deref(), Some("verb"));
    }

    #[test]
    fn test_bare_label_without_colon() {
        let text = "1. Word 你好\n2. Pinyin nǐ hǎo\n3. Part of Speech interjection\n4. Meaning hello\n5. Example 你好！\n6. Synonyms 嗨";
        let record = &extract(text).records[0];
        assert_eq!(record.word.as_deref(), Some("你好"));
        assert_eq!(record.pronunciation.as_deref(), Some("nǐ hǎo"));
        assert_eq!(record.part_of_speech.as_deref(), Some("interjection"));
        assert_eq!(record.meaning.as_deref(), Some("hello"));
    }

    #[test]
    fn test_unlabelled_values() {
        let text = "1. 你好\n2. nǐ hǎo\n3. interjection\n4. hello\n5. 你好！\n6. N/A";
        let record = &extract(text).records[0];
        assert_eq!(record.word.as_deref(), Some("你好"));
        assert_eq!(record.meaning.as_deref(), Some("hello"));
    }

    #[test]
    fn test_example_colon_not_taken_as_label() {
        let text = "1. Word: 说\n2. Pinyin: shuō\n3. Part of Speech: verb\n4. Meaning: to say\n5. Example Usage: 他说：你好。\n6. Synonyms: 讲";
        let record = &extract(text).records[0];
        assert_eq!(record.example.as_deref(), Some("他说：你好。"));
    }

    #[test]
    fn test_continuation_line_appended() {
        let text = "1. Word: 你好\n2. Pinyin: nǐ hǎo\n3. Part of Speech: interjection\n4. Meaning: hello\n5. Example Usage: 你好，世界！\n   (Hello, world!)\n6. Synonyms: 嗨";
        let record = &extract(text).records[0];
        assert_eq!(
            record.example.as_deref(),
            Some("你好，世界！ (Hello, world!)")
        );
    }

    #[test]
    fn test_labels_decide_field_order() {
        let text = "1. Word: 你好\n2. Pinyin: nǐ hǎo\n3. Meaning: hello\n4. Part of Speech: interjection\n5. Example Usage: 你好，世界！\n6. Synonyms: 嗨";
        let record = &extract(text).records[0];
        assert_eq!(record.meaning.as_deref(), Some("hello"));
        assert_eq!(record.part_of_speech.as_deref(), Some("interjection"));
        assert_eq!(record.example.as_deref(), Some("你好，世界！"));
    }

    #[test]
    fn test_duplicate_labels_fall_back_to_position() {
        let text = "1. Word: 你好\n2. Pinyin: nǐ hǎo\n3. Meaning: interjection\n4. Meaning: hello\n5. Example Usage: 你好！\n6. Synonyms: 嗨";
        let record = &extract(text).records[0];
        assert_eq!(record.part_of_speech.as_deref(), Some("interjection"));
        assert_eq!(record.meaning.as_deref(), Some("hello"));
    }

    #[test]
    fn test_wrapped_synonyms_kept() {
        let text = "1. Word: 你好\n2. Pinyin: nǐ hǎo\n3. Part of Speech: interjection\n4. Meaning: hello\n5. Example Usage: 你好！\n6. Synonyms: 嗨,\n   哈喽\n\n1. Word: 世界\n2. Pinyin: shìjiè\n3. Part of Speech: noun\n4. Meaning: world\n5. Example Usage: 世界很大。\n6. Synonyms: N/A\n1. Word: 大\n2. Pinyin: dà\n3. Part of Speech: adjective\n4. Meaning: big\n5. Example Usage: 很大。\n6. Synonyms: 巨大";
        let extraction = extract(text);
        assert_eq!(extraction.records.len(), 3);
        assert_eq!(extraction.skipped, 0);
        assert_eq!(
            extraction.records[0].synonyms,
            Some(RawSynonyms::Text("嗨, 哈喽".to_string()))
        );
        assert_eq!(extraction.records[2].word.as_deref(), Some("大"));
    }

    #[test]
    fn test_trailing_prose_not_appended() {
        let text = format!("{}\nHope this helps!", HELLO);
        let extraction = extract(&text);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(
            extraction.records[0].synonyms,
            Some(RawSynonyms::Text("嗨".to_string()))
        );
    }

    #[test]
    fn test_trailing_partial_block_discarded() {
        let text = format!("{}\n\n1. Word: 世界\n2. Pinyin: shìjiè\n3. Part of Speech: noun", HELLO);
        let extraction = extract(&text);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_out_of_order_block_abandoned() {
        let text = format!("1. Word: 世界\n2. Pinyin: shìjiè\n4. Meaning: world\n{}", HELLO);
        let extraction = extract(&text);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.skipped, 1);
        assert_eq!(extraction.records[0].word.as_deref(), Some("你好"));
    }

    #[test]
    fn test_restart_on_new_first_line() {
        let text = format!("1. Word: 世界\n2. Pinyin: shìjiè\n{}", HELLO);
        let extraction = extract(&text);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn test_has_complete_sequence() {
        assert!(has_complete_sequence(HELLO));
        assert!(!has_complete_sequence("1. a\n2. b\n3. c"));
        assert!(!has_complete_sequence("1. a\n3. b\n4. c\n5. d\n6. e\n2. f"));
        assert!(!has_complete_sequence(""));
    }

    #[test]
    fn test_strip_bare_label() {
        assert_eq!(strip_bare_label("Part of Speech noun", Field::PartOfSpeech), "noun");
        assert_eq!(strip_bare_label("Word", Field::Word), "Word");
        assert_eq!(strip_bare_label("你好", Field::Word), "你好");
        assert_eq!(strip_bare_label("Meaning hello", Field::Word), "Meaning hello");
    }
}
