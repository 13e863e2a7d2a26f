//! Core traits and types for PQA (PDF Question Answering)
//!
//! This crate defines the fundamental traits and types used across the PQA
//! system. It provides capability-facing interfaces for embedding backends,
//! chat backends and vector stores, making the system test-friendly and
//! extensible.

pub mod chat;
pub mod config;
pub mod embedding;
pub mod error;
pub mod store;

pub use chat::ChatModel;
pub use config::Settings;
pub use embedding::Embedder;
pub use error::{Error, Result};
pub use store::{ChunkRecord, ScoredChunk, VectorStore};
