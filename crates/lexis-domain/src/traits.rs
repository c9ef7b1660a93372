//! Trait definitions for external interactions
//!
//! These traits define the boundary between the parsing core and the
//! text-generation service. Implementations live in other crates.

/// Trait for text-generation operations
///
/// Implemented by the infrastructure layer (lexis-llm). The returned text is
/// untrusted: it carries no schema guarantee and may arrive in any shape.
pub trait GenerationProvider {
    /// Error type for generation operations
    type Error;

    /// Generate a completion for a prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model behind this provider, for result metadata
    fn model_name(&self) -> &str {
        "llm"
    }
}
