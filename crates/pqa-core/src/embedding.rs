//! Embedding backend trait

use async_trait::async_trait;

use crate::Result;

/// Trait for embedding backends (OpenAI, Gemini, local models)
///
/// Implementations turn text into fixed-dimension vectors. The dimension is
/// fixed per backend/model but not known until the first call; callers that
/// need it read it off the first returned vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Short identifier of the backend ("openai", "gemini", "local")
    fn name(&self) -> &'static str;

    /// Model identifier this backend was constructed with
    fn model(&self) -> &str;

    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed several texts, preserving input order
    ///
    /// The default implementation issues sequential single embeds; backends
    /// with a batch endpoint override it. Output length always equals input
    /// length and `output[i]` corresponds to `texts[i]`.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }
}
