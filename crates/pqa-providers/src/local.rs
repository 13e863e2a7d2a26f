//! Local embedding backend via fastembed
//!
//! Keyless fallback mirroring the sentence-transformers default of the
//! hosted providers. Model weights are fetched once into the local cache on
//! first use; after that, everything runs offline.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::Mutex;

use pqa_core::{Embedder, Error, Result};

/// Local, in-process embedder
pub struct LocalEmbedder {
    model_name: String,
    // fastembed sessions are not shareable across concurrent calls
    inner: Mutex<TextEmbedding>,
}

fn resolve_model(name: &str) -> Result<EmbeddingModel> {
    match name {
        "sentence-transformers/all-MiniLM-L6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "BAAI/bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "nomic-ai/nomic-embed-text-v1.5" => Ok(EmbeddingModel::NomicEmbedTextV15),
        other => Err(Error::Configuration(format!(
            "modelo de embedding local não suportado: {other}"
        ))),
    }
}

impl LocalEmbedder {
    pub fn new(model_name: impl Into<String>) -> Result<Self> {
        let model_name = model_name.into();
        let model = resolve_model(&model_name)?;
        let inner = TextEmbedding::try_new(
            InitOptions::new(model).with_show_download_progress(false),
        )
        .map_err(|e| Error::Provider(format!("failed to load local embedding model: {e}")))?;
        Ok(Self {
            model_name,
            inner: Mutex::new(inner),
        })
    }
}

#[async_trait]
impl Embedder for LocalEmbedder {
    fn name(&self) -> &'static str {
        "local"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| Error::Provider("local model returned no embedding".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let model = self
            .inner
            .lock()
            .map_err(|_| Error::Provider("local embedding session poisoned".to_string()))?;
        model
            .embed(texts.to_vec(), None)
            .map_err(|e| Error::Provider(format!("local embedding failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_name_is_rejected() {
        assert!(matches!(
            resolve_model("acme/not-a-model"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn default_model_name_resolves() {
        assert!(resolve_model("sentence-transformers/all-MiniLM-L6-v2").is_ok());
    }
}
