//! JSON array responses

use super::ExtractStrategy;
use crate::error::ExtractionIssue;
use crate::types::{Extraction, Field, RawRecord, RawSynonyms};
use serde_json::Value;
use tracing::warn;

/// Reads a JSON array of objects, mapping keys to fields by alias
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArrayExtractor;

impl ExtractStrategy for JsonArrayExtractor {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extract(&self, text: &str) -> Result<Extraction, ExtractionIssue> {
        let body = json_body(text);

        let json: Value = serde_json::from_str(body).map_err(|e| {
            ExtractionIssue::MalformedStructuredOutput(format!("JSON parse error: {}", e))
        })?;

        let items = json.as_array().ok_or_else(|| {
            ExtractionIssue::MalformedStructuredOutput("Expected JSON array".to_string())
        })?;

        let mut extraction = Extraction::default();
        for (idx, item) in items.iter().enumerate() {
            match parse_record(item) {
                Some(record) => extraction.records.push(record),
                None => {
                    warn!("Element {} is not a JSON object, skipping", idx);
                    extraction.skipped += 1;
                }
            }
        }

        Ok(extraction)
    }
}

/// Whether the response body opens a JSON array of objects
///
/// `[{` and `[]` commit to JSON even if the rest is broken. Other
/// bracket-led text (`[Vocabulary analysis]`) only counts when it parses.
pub(crate) fn looks_like_json_array(text: &str) -> bool {
    let body = json_body(text);
    let Some(rest) = body.strip_prefix('[') else {
        return false;
    };

    let rest = rest.trim_start();
    rest.starts_with('{')
        || rest.starts_with(']')
        || serde_json::from_str::<Vec<Value>>(body).is_ok()
}

/// The JSON payload of a response, unwrapping a markdown code block
///
/// Generators often wrap JSON in ```` ```json ```` fences, sometimes after a
/// line of prose.
pub(crate) fn json_body(response: &str) -> &str {
    let trimmed = response.trim();

    let block = if trimmed.starts_with("```") {
        trimmed
    } else if let Some(start) = trimmed.find("```json") {
        &trimmed[start..]
    } else {
        return trimmed;
    };

    // Skip the opening fence and its language tag
    let inner = block[3..].trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let inner = match inner.find("```") {
        Some(end) => &inner[..end],
        None => inner,
    };
    inner.trim()
}

fn parse_record(item: &Value) -> Option<RawRecord> {
    let obj = item.as_object()?;

    let mut record = RawRecord::default();
    for (key, value) in obj {
        let Some(field) = Field::from_label(key) else {
            continue;
        };
        if record.has(field) {
            continue;
        }

        if field == Field::Synonyms {
            record.synonyms = synonyms_value(value);
        } else if let Some(text) = scalar_text(value) {
            record.set(field, text);
        }
    }

    Some(record)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            Some(parts.join(" "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

fn synonyms_value(value: &Value) -> Option<RawSynonyms> {
    match value {
        Value::Array(items) => Some(RawSynonyms::List(
            items.iter().filter_map(scalar_text).collect(),
        )),
        Value::Null | Value::Object(_) => None,
        other => scalar_text(other).map(RawSynonyms::Text),
    }
}
