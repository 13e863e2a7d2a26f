//! PDF ingestion pipeline
//!
//! Linear offline path: load pages, split into overlapping chunks, embed,
//! persist as one batch. Re-running appends duplicate chunks; duplicate
//! handling belongs to the store.

use serde_json::json;
use std::path::Path;

use pqa_core::{ChunkRecord, Error, Result, Settings, VectorStore};
use pqa_providers::select_embedder;
use pqa_store::{CollectionName, PgVectorStore};

use crate::pdf;
use crate::splitter::{CHUNK_OVERLAP, CHUNK_SIZE, TextSplitter};

/// Outcome of one ingestion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub pages: usize,
    pub chunks: usize,
    /// Dimension of the embedding vectors, 0 when nothing was embedded
    pub dimension: usize,
}

/// Ingest the configured PDF into the configured collection
pub async fn ingest(settings: &Settings) -> Result<IngestReport> {
    let pdf_path = Path::new(&settings.pdf_path);
    if !pdf_path.exists() {
        return Err(Error::NotFound(format!(
            "PDF não encontrado em: {}",
            settings.pdf_path
        )));
    }
    let database_url = settings.require_database_url()?.to_string();
    let collection = CollectionName::new(settings.collection.clone())?;

    let pages = pdf::load_pages(pdf_path)?;

    let splitter = TextSplitter::new(CHUNK_SIZE, CHUNK_OVERLAP);
    let ingested_at = chrono::Utc::now().to_rfc3339();
    let mut contents = Vec::new();
    let mut metadata = Vec::new();
    for page in &pages {
        for (index, chunk) in splitter.split(&page.text).into_iter().enumerate() {
            metadata.push(json!({
                "source": settings.pdf_path,
                "page": page.number,
                "chunk": index,
                "ingested_at": ingested_at,
            }));
            contents.push(chunk);
        }
    }

    let embedder = select_embedder(settings)?;
    let vectors = embedder.embed_batch(&contents).await?;
    let dimension = vectors.first().map(Vec::len).unwrap_or(0);

    let records: Vec<ChunkRecord> = contents
        .into_iter()
        .zip(metadata)
        .zip(vectors)
        .map(|((content, metadata), embedding)| ChunkRecord {
            content,
            metadata,
            embedding,
        })
        .collect();

    let mut store = PgVectorStore::connect(&database_url, collection).await?;
    let chunks = store.insert_batch(records).await?;

    Ok(IngestReport {
        pages: pages.len(),
        chunks,
        dimension,
    })
}
