//! Embedding and chat backends for PQA
//!
//! One module per backend plus the selection logic that picks exactly one
//! embedding backend and at most one chat backend from the resolved
//! [`Settings`](pqa_core::Settings).

mod gemini;
mod local;
mod openai;
mod select;

pub use gemini::{GeminiChat, GeminiEmbedder};
pub use local::LocalEmbedder;
pub use openai::{OpenAiChat, OpenAiEmbedder};
pub use select::{ChatChoice, EmbeddingChoice, choose_chat, choose_embedder, select_chat, select_embedder};

// Re-export core types
pub use pqa_core::{ChatModel, Embedder, Error, Result};
