use super::types::{ScoredChunk, TextChunk};
use super::RetrievalError;

/// Flat in-memory vector index over one document's chunks.
///
/// Built once per report, queried by exhaustive cosine scan, then dropped.
/// No incremental update or deletion.
pub struct FlatIndex {
    entries: Vec<IndexedChunk>,
}

struct IndexedChunk {
    chunk: TextChunk,
    embedding: Vec<f32>,
}

impl FlatIndex {
    /// Pair chunks with their embeddings. All embeddings must share one
    /// dimension and there must be exactly one per chunk.
    pub fn build(
        chunks: Vec<TextChunk>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<Self, RetrievalError> {
        if chunks.len() != embeddings.len() {
            return Err(RetrievalError::CountMismatch {
                chunks: chunks.len(),
                embeddings: embeddings.len(),
            });
        }
        if let Some(first) = embeddings.first() {
            let expected = first.len();
            for embedding in &embeddings {
                if embedding.len() != expected {
                    return Err(RetrievalError::DimensionMismatch {
                        expected,
                        actual: embedding.len(),
                    });
                }
            }
        }

        Ok(Self {
            entries: chunks
                .into_iter()
                .zip(embeddings)
                .map(|(chunk, embedding)| IndexedChunk { chunk, embedding })
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `top_k` chunks closest to the query, ordered by non-increasing
    /// cosine similarity. Equal scores keep ascending chunk-index order
    /// (the sort is stable and entries are stored in sequence order).
    pub fn search(&self, query_embedding: &[f32], top_k: usize) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk_index: entry.chunk.chunk_index,
                content: entry.chunk.content.clone(),
                char_offset: entry.chunk.char_offset,
                score: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        scored
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
