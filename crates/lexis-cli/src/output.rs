//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lexis_domain::{RecordSchema, VocabularyEntry};
use lexis_extractor::{
    to_csv_string, AnalysisResult, ExtractionIssue, PipelineOutcome, Translation,
    SYNONYM_SEPARATOR,
};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Message shown when a response yields nothing to display
pub const NO_DATA: &str = "No vocabulary data.";

/// Column headings for the vocabulary table
const TABLE_HEADER: [&str; 6] = ["Word", "Pronunciation", "Part of Speech", "Meaning", "Example", "Synonyms"];

/// Widest an example cell may get before wrapping
const EXAMPLE_WIDTH: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format vocabulary entries.
    pub fn format_entries(&self, entries: &[VocabularyEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_entries_json(entries),
            OutputFormat::Table => self.format_entries_table(entries),
            OutputFormat::Csv => Ok(to_csv_string(entries)?),
        }
    }

    /// Format a full analysis: translation, then the vocabulary.
    ///
    /// JSON output carries everything in one document; CSV output is the
    /// vocabulary only so it can be redirected to a file.
    pub fn format_analysis(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "translation": translation_json(&result.translation),
                    "format": result.vocabulary.format().as_str(),
                    "entries": entries_json(result.vocabulary.entries()),
                    "issues": issues_json(&result.vocabulary.issues()),
                    "metadata": {
                        "model": result.metadata.model_name,
                        "source_language": result.metadata.source_language.code(),
                        "target_language": result.metadata.target_language.code(),
                        "timestamp": result.metadata.timestamp,
                        "processing_time_ms": result.metadata.processing_time_ms,
                    },
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Csv => self.format_entries(result.vocabulary.entries()),
            OutputFormat::Table => {
                let mut output = String::new();
                match &result.translation {
                    Translation::Skipped => {}
                    Translation::Translated(text) => {
                        output.push_str(&self.heading("Translation"));
                        output.push('\n');
                        output.push_str(text);
                        output.push_str("\n\n");
                    }
                    Translation::Failed(reason) => {
                        output.push_str(&self.warning(&format!("Translation failed: {}", reason)));
                        output.push_str("\n\n");
                    }
                }
                output.push_str(&self.heading("Vocabulary"));
                output.push('\n');
                output.push_str(&self.format_outcome(&result.vocabulary)?);
                Ok(output)
            }
        }
    }

    /// Format a pipeline outcome.
    pub fn format_outcome(&self, outcome: &PipelineOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "format": outcome.format().as_str(),
                    "entries": entries_json(outcome.entries()),
                    "issues": issues_json(&outcome.issues()),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            _ => self.format_entries(outcome.entries()),
        }
    }

    /// Format entries as JSON.
    fn format_entries_json(&self, entries: &[VocabularyEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&entries_json(entries))?)
    }

    /// Format entries as a table.
    fn format_entries_table(&self, entries: &[VocabularyEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok(self.colorize(NO_DATA, "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(TABLE_HEADER);

        for entry in entries {
            builder.push_record(entry.to_row(SYNONYM_SEPARATOR));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::single(4)).with(Width::wrap(EXAMPLE_WIDTH)));

        Ok(table.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a section heading.
    pub fn heading(&self, title: &str) -> String {
        self.colorize(title, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn entries_json(entries: &[VocabularyEntry]) -> serde_json::Value {
    entries
        .iter()
        .map(|entry| {
            let mut object = serde_json::Map::new();
            let values = [
                serde_json::Value::from(entry.word.as_str()),
                serde_json::Value::from(entry.pronunciation.as_str()),
                serde_json::Value::from(entry.part_of_speech.as_str()),
                serde_json::Value::from(entry.meaning.as_str()),
                serde_json::Value::from(entry.example.as_str()),
                serde_json::Value::from(entry.synonyms.clone()),
            ];
            for (name, value) in RecordSchema::FIELDS.iter().zip(values) {
                object.insert(name.to_string(), value);
            }
            serde_json::Value::Object(object)
        })
        .collect()
}

fn issues_json(issues: &[ExtractionIssue]) -> serde_json::Value {
    issues.iter().map(|issue| serde_json::Value::from(issue.to_string())).collect()
}

fn translation_json(translation: &Translation) -> serde_json::Value {
    match translation {
        Translation::Skipped => serde_json::Value::Null,
        Translation::Translated(text) => serde_json::json!({ "text": text }),
        Translation::Failed(reason) => serde_json::json!({ "error": reason }),
    }
}
