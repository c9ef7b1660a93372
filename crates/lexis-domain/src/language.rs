//! Language module - source and target languages for analysis

/// A language the analysis prompts can name
///
/// The generator is addressed in English, so every language carries both its
/// short code (used on the command line and in config) and its English name
/// (used inside prompts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Mandarin Chinese
    Chinese,

    /// English
    English,

    /// Thai
    Thai,

    /// Japanese
    Japanese,

    /// Korean
    Korean,
}

impl Language {
    /// Get the short language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
            Language::Thai => "th",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    /// Get the English name used in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::English => "English",
            Language::Thai => "Thai",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
        }
    }

    /// Parse a language from its code or English name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "cn" | "chinese" | "mandarin" => Some(Language::Chinese),
            "en" | "english" => Some(Language::English),
            "th" | "thai" => Some(Language::Thai),
            "ja" | "jp" | "japanese" => Some(Language::Japanese),
            "ko" | "kr" | "korean" => Some(Language::Korean),
            _ => None,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
