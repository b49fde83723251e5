use serde::{Deserialize, Serialize};

use super::index::FlatIndex;
use super::types::{EmbeddingModel, ScoredChunk};
use super::RetrievalError;

/// The chunks closest to a focus query, kept for display alongside the
/// analysis. Transient, one per report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedContext {
    pub query: String,
    pub chunks: Vec<ScoredChunk>,
}

impl RetrievedContext {
    /// The retrieved chunk texts joined for display.
    pub fn combined_text(&self) -> String {
        self.chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Embed the query and fetch its nearest chunks from the index.
/// An empty index yields an empty context, not an error.
pub fn retrieve(
    query_text: &str,
    embedder: &dyn EmbeddingModel,
    index: &FlatIndex,
    top_k: usize,
) -> Result<RetrievedContext, RetrievalError> {
    if index.is_empty() {
        return Ok(RetrievedContext {
            query: query_text.to_string(),
            chunks: Vec::new(),
        });
    }

    let query_embedding = embedder.embed(query_text)?;
    let chunks = index.search(&query_embedding, top_k);

    tracing::debug!(
        query = query_text,
        retrieved = chunks.len(),
        "semantic retrieval complete"
    );

    Ok(RetrievedContext {
        query: query_text.to_string(),
        chunks,
    })
}
