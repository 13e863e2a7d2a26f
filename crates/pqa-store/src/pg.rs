//! pgvector-backed store implementation

use async_trait::async_trait;
use pgvector::Vector;
use tokio_postgres::types::Json;
use tokio_postgres::{Client, NoTls};
use uuid::Uuid;

use pqa_core::{ChunkRecord, Error, Result, ScoredChunk, VectorStore};

use crate::CollectionName;

/// Vector store over one Postgres/pgvector table
pub struct PgVectorStore {
    client: Client,
    collection: CollectionName,
}

impl PgVectorStore {
    /// Connect to Postgres and bind to the given collection
    ///
    /// The connection task is driven in the background and lives as long as
    /// the store; dropping the store closes it.
    pub async fn connect(database_url: &str, collection: CollectionName) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls)
            .await
            .map_err(|e| Error::Connection(format!("Postgres unreachable: {e}")))?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                eprintln!("postgres connection error: {err}");
            }
        });
        Ok(Self { client, collection })
    }

    /// Create the vector extension and the collection table if absent
    ///
    /// The embedding column dimension is fixed at creation time from the
    /// first batch; later batches with a different dimension fail in the
    /// store, not here.
    async fn ensure_schema(&self, dimension: usize) -> Result<()> {
        self.client
            .batch_execute("CREATE EXTENSION IF NOT EXISTS vector")
            .await
            .map_err(|e| Error::Store(format!("failed to create vector extension: {e}")))?;

        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (\
                id UUID PRIMARY KEY, \
                content TEXT NOT NULL, \
                metadata JSONB NOT NULL DEFAULT '{{}}'::jsonb, \
                embedding vector({dimension}) NOT NULL\
            )",
            self.collection.quoted()
        );
        self.client
            .batch_execute(&ddl)
            .await
            .map_err(|e| Error::Store(format!("failed to create collection table: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl VectorStore for PgVectorStore {
    async fn insert_batch(&mut self, records: Vec<ChunkRecord>) -> Result<usize> {
        let Some(first) = records.first() else {
            return Ok(0);
        };
        if first.embedding.is_empty() {
            return Err(Error::Store(
                "first record is missing its embedding vector".to_string(),
            ));
        }
        self.ensure_schema(first.embedding.len()).await?;

        let transaction = self
            .client
            .transaction()
            .await
            .map_err(|e| Error::Store(format!("failed to open transaction: {e}")))?;
        let statement = transaction
            .prepare(&format!(
                "INSERT INTO {} (id, content, metadata, embedding) VALUES ($1, $2, $3, $4)",
                self.collection.quoted()
            ))
            .await
            .map_err(|e| Error::Store(format!("failed to prepare insert: {e}")))?;

        let written = records.len();
        for record in records {
            transaction
                .execute(
                    &statement,
                    &[
                        &Uuid::new_v4(),
                        &record.content,
                        &Json(&record.metadata),
                        &Vector::from(record.embedding),
                    ],
                )
                .await
                .map_err(|e| Error::Store(format!("insert failed: {e}")))?;
        }
        transaction
            .commit()
            .await
            .map_err(|e| Error::Store(format!("commit failed: {e}")))?;
        Ok(written)
    }

    async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredChunk>> {
        let query = format!(
            "SELECT content, metadata, embedding <=> $1 AS score \
             FROM {} ORDER BY embedding <=> $1 LIMIT $2",
            self.collection.quoted()
        );
        let probe = Vector::from(vector.to_vec());
        let rows = self
            .client
            .query(&query, &[&probe, &(k as i64)])
            .await
            .map_err(|e| Error::Store(format!("similarity query failed: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let metadata: Json<serde_json::Value> = row.get("metadata");
                ScoredChunk {
                    content: row.get("content"),
                    metadata: metadata.0,
                    score: row.get::<_, f64>("score") as f32,
                }
            })
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        let query = format!("SELECT COUNT(*) FROM {}", self.collection.quoted());
        let row = self
            .client
            .query_one(&query, &[])
            .await
            .map_err(|e| Error::Store(format!("count failed: {e}")))?;
        Ok(row.get::<_, i64>(0) as u64)
    }
}
