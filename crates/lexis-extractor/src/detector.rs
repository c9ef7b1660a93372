//! Response format detection
//!
//! Chooses which extraction grammar to apply to a generator response. Probes
//! run in a fixed priority order: JSON first because it is unambiguous, then
//! tab-delimited rows (a delimited row may start with a digit and must not be
//! mistaken for a numbered list), then numbered lists, then the loose
//! dash-separated fallback.

use crate::extractors::{delimited, json, numbered};
use std::fmt;

/// The response shape an extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    /// JSON array of objects
    Json,
    /// One tab-separated row per word
    Delimited,
    /// Six numbered lines per word
    NumberedList,
    /// Best-effort dash-separated lines
    Loose,
}

/// How much the detector trusts its choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// A structural probe matched
    High,
    /// Nothing matched; the fallback grammar was chosen
    Low,
}

impl ResponseFormat {
    /// Confidence attached to this format
    pub fn confidence(&self) -> Confidence {
        match self {
            ResponseFormat::Loose => Confidence::Low,
            _ => Confidence::High,
        }
    }

    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Delimited => "delimited",
            ResponseFormat::NumberedList => "numbered",
            ResponseFormat::Loose => "loose",
        }
    }

    /// Parse a format from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ResponseFormat::Json),
            "delimited" | "tab" | "tsv" => Some(ResponseFormat::Delimited),
            "numbered" | "list" => Some(ResponseFormat::NumberedList),
            "loose" | "dash" => Some(ResponseFormat::Loose),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid response format: {}", s))
    }
}

/// Detect the format of a raw response. Never fails.
pub fn detect(text: &str) -> ResponseFormat {
    if json::looks_like_json_array(text) {
        ResponseFormat::Json
    } else if delimited::looks_delimited(text) {
        ResponseFormat::Delimited
    } else if numbered::has_complete_sequence(text) {
        ResponseFormat::NumberedList
    } else {
        ResponseFormat::Loose
    }
}
