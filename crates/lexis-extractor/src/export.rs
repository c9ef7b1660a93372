//! CSV export of a vocabulary batch

use crate::error::ExtractorError;
use lexis_domain::{RecordSchema, VocabularyEntry};
use std::io::Write;

/// Separator placed between synonyms in the `synonyms` column
pub const SYNONYM_SEPARATOR: &str = "; ";

/// Write entries as CSV, header first, one row per entry in order
///
/// The header is written even when `entries` is empty.
pub fn write_csv<W: Write>(entries: &[VocabularyEntry], writer: W) -> Result<(), ExtractorError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(RecordSchema::FIELDS)?;
    for entry in entries {
        csv_writer.write_record(entry.to_row(SYNONYM_SEPARATOR))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render entries as a CSV string
pub fn to_csv_string(entries: &[VocabularyEntry]) -> Result<String, ExtractorError> {
    let mut buffer = Vec::new();
    write_csv(entries, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExtractorError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("你好", "hello")
                .with_pronunciation("nǐ hǎo")
                .with_part_of_speech("interjection")
                .with_example("你好，世界！")
                .with_synonyms(["嗨"]),
            VocabularyEntry::new("学习", "to study")
                .with_pronunciation("xuéxí")
                .with_part_of_speech("verb")
                .with_example("他学习中文。")
                .with_synonyms(["学", "研习"]),
        ]
    }

    fn read_back(csv_text: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn test_header_and_rows() {
        let csv_text = to_csv_string(&sample()).unwrap();
        let (headers, rows) = read_back(&csv_text);

        assert_eq!(headers, RecordSchema::FIELDS);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "你好");
        assert_eq!(rows[1][5], "学; 研习");
    }

    #[test]
    fn test_header_stable_for_any_entry_count() {
        let entries = sample();
        for count in 0..=entries.len() {
            let csv_text = to_csv_string(&entries[..count]).unwrap();
            let (headers, rows) = read_back(&csv_text);
            assert_eq!(headers.len(), RecordSchema::FIELD_COUNT);
            assert_eq!(headers, RecordSchema::FIELDS);
            assert_eq!(rows.len(), count);
            assert!(rows.iter().all(|row| row.len() == RecordSchema::FIELD_COUNT));
        }
    }

    #[test]
    fn test_empty_batch_writes_header_only() {
        let csv_text = to_csv_string(&[]).unwrap();
        assert_eq!(csv_text, "word,pronunciation,partOfSpeech,meaning,example,synonyms\n");
    }

    #[test]
    fn test_commas_and_quotes_escaped() {
        let entry = VocabularyEntry::new("好", "good, well")
            .with_example("他说：\"好\"。");
        let csv_text = to_csv_string(&[entry]).unwrap();
        let (_, rows) = read_back(&csv_text);
        assert_eq!(rows[0][3], "good, well");
        assert_eq!(rows[0][4], "他说：\"好\"。");
    }
}
