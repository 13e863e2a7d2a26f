//! Postgres/pgvector vector store
//!
//! One collection maps to one table holding (id, content, metadata JSONB,
//! embedding vector). The table and the `vector` extension are created on
//! first insert, with the column dimension taken from the first batch.

mod collection;
mod pg;

pub use collection::CollectionName;
pub use pg::PgVectorStore;

// Re-export core types
pub use pqa_core::{ChunkRecord, Error, Result, ScoredChunk, VectorStore};
