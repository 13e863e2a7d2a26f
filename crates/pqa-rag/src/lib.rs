//! Ingestion, retrieval and answering pipeline
//!
//! The offline path (`ingest`) loads a PDF, splits it into overlapping
//! chunks, embeds them and persists everything into the vector store. The
//! online path (`Answerer`) retrieves the top-k chunks for a question,
//! builds the context block and either delegates to a chat backend or falls
//! back to the conservative rule-based answer.

mod answerer;
mod context;
mod ingest;
mod offline;
mod pdf;
mod prompt;
mod retriever;
mod splitter;

pub use answerer::{Answerer, respond};
pub use context::{CONTEXT_SEPARATOR, build_context};
pub use ingest::{IngestReport, ingest};
pub use offline::{NOT_ENOUGH, offline_answer};
pub use pdf::{PageText, load_pages};
pub use prompt::{PROMPT_TEMPLATE, render_prompt};
pub use retriever::Retriever;
pub use splitter::{CHUNK_OVERLAP, CHUNK_SIZE, TextSplitter};

// Re-export core types
pub use pqa_core::{Error, Result, ScoredChunk, Settings};
