//! Process configuration
//!
//! All environment access happens here, once per entry point. Components
//! receive a `Settings` reference and never read ambient environment state
//! themselves, which keeps provider selection deterministic under test.

use serde::{Deserialize, Serialize};
use std::env;

use crate::{Error, Result};

/// Resolved configuration for one invocation
///
/// Constructed from the environment by [`Settings::from_env`] or assembled
/// explicitly in tests. Re-resolving between calls picks up environment
/// changes; a call already in flight is never affected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Explicit chat provider request (`LLM_PROVIDER`), lower-cased
    pub llm_provider: Option<String>,
    /// Explicit embedding provider request (`EMBEDDING_PROVIDER`), lower-cased
    pub embedding_provider: Option<String>,
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub openai_chat_model: String,
    pub gemini_chat_model: String,
    pub openai_embedding_model: String,
    pub google_embedding_model: String,
    pub local_embedding_model: String,
    pub pdf_path: String,
    pub database_url: Option<String>,
    /// Logical collection (table) name inside the vector store
    pub collection: String,
    pub debug: bool,
}

impl Settings {
    /// Read configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            llm_provider: non_empty(env::var("LLM_PROVIDER").ok()).map(|v| v.to_lowercase()),
            embedding_provider: non_empty(env::var("EMBEDDING_PROVIDER").ok())
                .map(|v| v.to_lowercase()),
            openai_api_key: non_empty(env::var("OPENAI_API_KEY").ok()),
            google_api_key: non_empty(env::var("GOOGLE_API_KEY").ok()),
            openai_chat_model: env::var("OPENAI_CHAT_MODEL")
                .unwrap_or_else(|_| "gpt-5-nano".to_string()),
            gemini_chat_model: env::var("GEMINI_CHAT_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-lite".to_string()),
            openai_embedding_model: env::var("OPENAI_EMBEDDING_MODEL")
                .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
            google_embedding_model: env::var("GOOGLE_EMBEDDING_MODEL")
                .unwrap_or_else(|_| "models/embedding-001".to_string()),
            local_embedding_model: env::var("LOCAL_EMBEDDING_MODEL")
                .unwrap_or_else(|_| "sentence-transformers/all-MiniLM-L6-v2".to_string()),
            pdf_path: env::var("PDF_PATH").unwrap_or_else(|_| "./document.pdf".to_string()),
            database_url: non_empty(env::var("DATABASE_URL").ok()),
            collection: env::var("PG_VECTOR_COLLECTION_NAME")
                .unwrap_or_else(|_| "pdf_chunks".to_string()),
            debug: matches!(
                env::var("DEBUG").unwrap_or_default().to_lowercase().as_str(),
                "1" | "true"
            ),
        }
    }

    /// Configuration with every remote credential absent and defaults filled
    ///
    /// Useful as a test baseline; production code goes through `from_env`.
    pub fn offline_defaults() -> Self {
        Self {
            llm_provider: None,
            embedding_provider: None,
            openai_api_key: None,
            google_api_key: None,
            openai_chat_model: "gpt-5-nano".to_string(),
            gemini_chat_model: "gemini-2.5-flash-lite".to_string(),
            openai_embedding_model: "text-embedding-3-small".to_string(),
            google_embedding_model: "models/embedding-001".to_string(),
            local_embedding_model: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            pdf_path: "./document.pdf".to_string(),
            database_url: None,
            collection: "pdf_chunks".to_string(),
            debug: false,
        }
    }

    /// Database URL, or a configuration error when unset
    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Configuration("DATABASE_URL ausente".to_string()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn settings_snapshot() {
        let settings = Settings {
            llm_provider: Some("openai".to_string()),
            embedding_provider: Some("local".to_string()),
            openai_api_key: Some("test_openai_key_redacted".to_string()),
            google_api_key: Some("test_google_key_redacted".to_string()),
            database_url: Some("postgres://pqa@localhost/rag".to_string()),
            ..Settings::offline_defaults()
        };

        assert_yaml_snapshot!(settings, @r###"
        ---
        llm_provider: openai
        embedding_provider: local
        openai_api_key: test_openai_key_redacted
        google_api_key: test_google_key_redacted
        openai_chat_model: gpt-5-nano
        gemini_chat_model: gemini-2.5-flash-lite
        openai_embedding_model: text-embedding-3-small
        google_embedding_model: models/embedding-001
        local_embedding_model: sentence-transformers/all-MiniLM-L6-v2
        pdf_path: ./document.pdf
        database_url: "postgres://pqa@localhost/rag"
        collection: pdf_chunks
        debug: false
        "###);
    }

    #[test]
    fn offline_defaults_have_no_credentials() {
        let settings = Settings::offline_defaults();
        assert!(settings.openai_api_key.is_none());
        assert!(settings.google_api_key.is_none());
        assert!(settings.llm_provider.is_none());
        assert_eq!(settings.collection, "pdf_chunks");
    }

    #[test]
    fn require_database_url_rejects_missing_and_blank() {
        let mut settings = Settings::offline_defaults();
        assert!(settings.require_database_url().is_err());

        settings.database_url = Some("   ".to_string());
        assert!(settings.require_database_url().is_err());

        settings.database_url = Some("postgres://localhost/rag".to_string());
        assert_eq!(
            settings.require_database_url().unwrap(),
            "postgres://localhost/rag"
        );
    }
}
