//! Vector store trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A chunk ready for persistence: text, queryable metadata and its vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub content: String,
    pub metadata: serde_json::Value,
    pub embedding: Vec<f32>,
}

/// One similarity-query hit
///
/// `score` is the store-defined distance; results are ordered best-first
/// (ascending distance). Ephemeral, lives for the duration of one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub content: String,
    pub metadata: serde_json::Value,
    pub score: f32,
}

/// Trait for vector stores
///
/// Covers exactly what the pipeline needs: batched persistence and top-k
/// nearest-neighbour queries against one named collection. Duplicate
/// handling is the store's own policy; re-inserting the same content
/// appends new rows.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Persist records as one logical batch, returning how many were written
    async fn insert_batch(&mut self, records: Vec<ChunkRecord>) -> Result<usize>;

    /// Return up to `k` stored chunks nearest to `vector`, best-first
    async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredChunk>>;

    /// Number of stored chunks in the collection
    async fn count(&self) -> Result<u64>;
}
