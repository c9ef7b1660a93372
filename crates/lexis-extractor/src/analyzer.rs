//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::ExtractorError;
use crate::pipeline::Pipeline;
use crate::prompt::PromptBuilder;
use crate::types::{AnalysisMetadata, AnalysisRequest, AnalysisResult, Translation};
use lexis_domain::traits::GenerationProvider;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Analyzer turns one source sentence into a translation and a
/// vocabulary table
pub struct Analyzer<L>
where
    L: GenerationProvider,
{
    provider: Arc<L>,
    config: AnalyzerConfig,
    pipeline: Pipeline,
}

impl<L> Analyzer<L>
where
    L: GenerationProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Analyzer
    pub fn new(provider: L, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
            pipeline: Pipeline::new(),
        }
    }

    /// Use a specific pipeline, e.g. one with a forced response format
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Build a request from the configured default languages
    pub fn request(&self, text: impl Into<String>) -> Result<AnalysisRequest, ExtractorError> {
        let source = self.config.source().map_err(ExtractorError::Config)?;
        let target = self.config.target().map_err(ExtractorError::Config)?;
        Ok(AnalysisRequest::new(text, target)
            .with_source_language(source)
            .with_translation(self.config.translate))
    }

    /// Translate and analyze one sentence
    ///
    /// The translation and vocabulary calls run concurrently. A failed
    /// translation is recorded in the result; a failed vocabulary call is an
    /// error. Parse problems in the vocabulary response never are: they are
    /// part of the pipeline outcome.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ExtractorError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(ExtractorError::EmptyInput);
        }

        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        info!(
            "Analyzing {} chars of {} into {}",
            length, request.source_language, request.target_language
        );
        let start = Instant::now();

        let prompts = PromptBuilder::new(text, request.source_language, request.target_language);
        let vocabulary_prompt = prompts.build_vocabulary();
        debug!("Vocabulary prompt length: {} chars", vocabulary_prompt.len());

        let translation_call = async {
            if !request.translate {
                return Translation::Skipped;
            }
            match self.generate(prompts.build_translation()).await {
                Ok(translated) => Translation::Translated(translated.trim().to_string()),
                Err(e) => {
                    warn!("Translation failed: {}", e);
                    Translation::Failed(e.to_string())
                }
            }
        };

        let (translation, raw_response) =
            tokio::join!(translation_call, self.generate(vocabulary_prompt));
        let raw_response = raw_response?;

        debug!("Vocabulary response length: {} chars", raw_response.len());
        let vocabulary = self.pipeline.run(&raw_response);

        let metadata = AnalysisMetadata {
            model_name: self.provider.model_name().to_string(),
            source_language: request.source_language,
            target_language: request.target_language,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Analysis complete: {} entries ({}), translation {}",
            vocabulary.entries().len(),
            vocabulary.format(),
            match &translation {
                Translation::Skipped => "skipped",
                Translation::Translated(_) => "ok",
                Translation::Failed(_) => "failed",
            }
        );

        Ok(AnalysisResult {
            translation,
            vocabulary,
            raw_response,
            metadata,
        })
    }

    /// Call the provider on a worker thread, bounded by the configured timeout
    async fn generate(&self, prompt: String) -> Result<String, ExtractorError> {
        let provider = Arc::clone(&self.provider);

        // GenerationProvider is synchronous; keep it off the async workers
        let call = tokio::task::spawn_blocking(move || {
            provider
                .generate(&prompt)
                .map_err(|e| ExtractorError::Generation(e.to_string()))
        });

        timeout(self.config.generation_timeout(), call)
            .await
            .map_err(|_| ExtractorError::Timeout)?
            .map_err(|e| ExtractorError::Generation(format!("Task join error: {}", e)))?
    }
}
