//! Chat backend trait

use async_trait::async_trait;

use crate::Result;

/// Trait for LLM chat backends
///
/// A backend receives the fully assembled prompt and returns the model's
/// text output verbatim. No post-processing or validation happens on this
/// side of the boundary.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Short identifier of the backend ("openai", "gemini")
    fn name(&self) -> &'static str;

    /// Model identifier this backend was constructed with
    fn model(&self) -> &str;

    /// Generate a completion for the given prompt
    async fn complete(&self, prompt: &str) -> Result<String>;
}
