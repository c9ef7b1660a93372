//! Lexis Generation Provider Layer
//!
//! Pluggable text-generation providers for vocabulary analysis.
//!
//! # Architecture
//!
//! This crate provides implementations of the `GenerationProvider` trait from
//! `lexis-domain`. The parsing core never talks to a provider directly; the
//! analyzer in `lexis-extractor` hands it prompts and receives raw text.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use lexis_llm::MockProvider;
//! use lexis_domain::traits::GenerationProvider;
//!
//! let provider = MockProvider::new("1. Word : 你好");
//! let result = provider.generate("analyze 你好").unwrap();
//! assert_eq!(result, "1. Word : 你好");
//! ```

#![warn(missing_docs)]

pub mod openai;

use lexis_domain::traits::GenerationProvider;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during generation calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing or rejected API key
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Marker response that makes `MockProvider` return an error
const MOCK_ERROR: &str = "ERROR";

/// Mock provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are selected by the first registered fragment contained in the
/// prompt, so a test can answer the translation prompt and the vocabulary
/// prompt differently.
///
/// # Examples
///
/// ```
/// use lexis_llm::MockProvider;
/// use lexis_domain::traits::GenerationProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("Translate", "Hello");
/// provider.add_response("Analyze", "[]");
/// assert_eq!(provider.generate("Translate the following...").unwrap(), "Hello");
/// assert_eq!(provider.generate("Analyze the following...").unwrap(), "[]");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer prompts containing `fragment` with `response`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push((fragment.into(), response.into()));
        }
    }

    /// Fail prompts containing `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.add_response(fragment, MOCK_ERROR);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("")
    }
}

impl GenerationProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts
            .lock()
            .map_err(|e| LlmError::Other(format!("Mock lock poisoned: {}", e)))?
            .push(prompt.to_string());

        let responses = self
            .responses
            .lock()
            .map_err(|e| LlmError::Other(format!("Mock lock poisoned: {}", e)))?;

        let response = responses
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment.as_str()))
            .map(|(_, response)| response.as_str())
            .unwrap_or(&self.default_response);

        if response == MOCK_ERROR {
            return Err(LlmError::Other("Mock error".to_string()));
        }
        Ok(response.to_string())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt");
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_fragment_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("Translate", "Hello world");
        provider.add_response("Analyze", "我\twǒ\tpronoun\tI\t我很好。\tN/A");

        assert_eq!(
            provider.generate("Translate the following Chinese sentence").unwrap(),
            "Hello world"
        );
        assert!(provider.generate("Analyze this").unwrap().starts_with("我"));
        assert_eq!(provider.generate("unknown").unwrap(), "");
    }

    #[test]
    fn test_mock_provider_first_fragment_wins() {
        let mut provider = MockProvider::default();
        provider.add_response("sentence", "first");
        provider.add_response("Chinese sentence", "second");

        assert_eq!(provider.generate("a Chinese sentence").unwrap(), "first");
    }

    #[test]
    fn test_mock_provider_call_count_and_prompts() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").unwrap();
        provider.generate("prompt2").unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["prompt1", "prompt2"]);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.generate("this is a bad prompt");
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_mock_model_name() {
        assert_eq!(MockProvider::default().model_name(), "mock");
    }
}
