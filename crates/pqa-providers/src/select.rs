//! Provider selection
//!
//! The precedence rules are pure functions over [`Settings`] so they can be
//! tested exhaustively; the `select_*` wrappers construct the chosen client.
//! Selection never performs a network call.

use pqa_core::{ChatModel, Embedder, Error, Result, Settings};

use crate::{GeminiChat, GeminiEmbedder, LocalEmbedder, OpenAiChat, OpenAiEmbedder};

/// Which embedding backend a configuration resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingChoice {
    OpenAi,
    Gemini,
    Local,
}

/// Which chat backend a configuration resolves to, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatChoice {
    OpenAi,
    Gemini,
    /// No credentials at all: rule-based answering only
    Offline,
}

/// Resolve the embedding backend.
///
/// Precedence: explicit `local` wins unconditionally; explicit `gemini`
/// requires its key and fails hard without one; anything else falls back to
/// OpenAI key, then Google key, then the local model.
pub fn choose_embedder(settings: &Settings) -> Result<EmbeddingChoice> {
    match settings.embedding_provider.as_deref() {
        Some("local") => Ok(EmbeddingChoice::Local),
        Some("gemini") => {
            if settings.google_api_key.is_some() {
                Ok(EmbeddingChoice::Gemini)
            } else {
                Err(Error::Configuration(
                    "GOOGLE_API_KEY ausente para provider gemini".to_string(),
                ))
            }
        }
        _ => {
            if settings.openai_api_key.is_some() {
                Ok(EmbeddingChoice::OpenAi)
            } else if settings.google_api_key.is_some() {
                Ok(EmbeddingChoice::Gemini)
            } else {
                Ok(EmbeddingChoice::Local)
            }
        }
    }
}

/// Resolve the chat backend.
///
/// An explicit provider only wins when its key is present; otherwise the
/// automatic fallback applies. No local chat model exists, so the absence of
/// both keys means offline mode rather than an error.
pub fn choose_chat(settings: &Settings) -> ChatChoice {
    let provider = settings.llm_provider.as_deref();
    let openai_key = settings.openai_api_key.is_some();
    let google_key = settings.google_api_key.is_some();

    if provider == Some("gemini") && google_key {
        return ChatChoice::Gemini;
    }
    if provider == Some("openai") && openai_key {
        return ChatChoice::OpenAi;
    }

    if openai_key {
        ChatChoice::OpenAi
    } else if google_key {
        ChatChoice::Gemini
    } else {
        ChatChoice::Offline
    }
}

/// Construct the embedding backend chosen by [`choose_embedder`]
pub fn select_embedder(settings: &Settings) -> Result<Box<dyn Embedder>> {
    match choose_embedder(settings)? {
        EmbeddingChoice::Local => Ok(Box::new(LocalEmbedder::new(
            settings.local_embedding_model.clone(),
        )?)),
        EmbeddingChoice::Gemini => {
            let key = settings.google_api_key.as_deref().unwrap_or_default();
            Ok(Box::new(GeminiEmbedder::new(
                key,
                settings.google_embedding_model.clone(),
            )?))
        }
        EmbeddingChoice::OpenAi => {
            let key = settings.openai_api_key.as_deref().unwrap_or_default();
            Ok(Box::new(OpenAiEmbedder::new(
                key,
                settings.openai_embedding_model.clone(),
            )?))
        }
    }
}

/// Construct the chat backend chosen by [`choose_chat`], `None` when offline
pub fn select_chat(settings: &Settings) -> Result<Option<Box<dyn ChatModel>>> {
    match choose_chat(settings) {
        ChatChoice::Gemini => {
            let key = settings.google_api_key.as_deref().unwrap_or_default();
            Ok(Some(Box::new(GeminiChat::new(
                key,
                settings.gemini_chat_model.clone(),
            )?)))
        }
        ChatChoice::OpenAi => {
            let key = settings.openai_api_key.as_deref().unwrap_or_default();
            Ok(Some(Box::new(OpenAiChat::new(
                key,
                settings.openai_chat_model.clone(),
            )?)))
        }
        ChatChoice::Offline => Ok(None),
    }
}
