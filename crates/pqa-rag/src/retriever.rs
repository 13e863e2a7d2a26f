//! Top-k similarity retrieval

use pqa_core::{Result, ScoredChunk, Settings, VectorStore};
use pqa_providers::select_embedder;
use pqa_store::{CollectionName, PgVectorStore};

/// Embeds a question and queries the configured collection
///
/// Provider selection and the store connection are re-resolved per call, so
/// configuration changes between calls are picked up on the next one.
pub struct Retriever<'a> {
    settings: &'a Settings,
}

impl<'a> Retriever<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Return up to `k` chunks nearest to `question`, best-first
    pub async fn similarity_search(&self, question: &str, k: usize) -> Result<Vec<ScoredChunk>> {
        let database_url = self.settings.require_database_url()?;
        let collection = CollectionName::new(self.settings.collection.clone())?;

        let embedder = select_embedder(self.settings)?;
        let vector = embedder.embed(question).await?;

        let store = PgVectorStore::connect(database_url, collection).await?;
        store.query(&vector, k).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqa_core::Error;

    #[tokio::test]
    async fn missing_database_url_is_a_configuration_error() {
        let settings = Settings::offline_defaults();
        let retriever = Retriever::new(&settings);
        let result = retriever.similarity_search("Qual o faturamento?", 10).await;
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
