use serde::{Deserialize, Serialize};

use super::RetrievalError;

/// One window of report text, immutable for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunk {
    pub content: String,
    /// Position in the chunk sequence; also the retrieval tie-break key.
    pub chunk_index: usize,
    /// Offset of the first character of this chunk, in characters.
    pub char_offset: usize,
}

/// A chunk with its similarity score, as returned by index search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk_index: usize,
    pub content: String,
    pub char_offset: usize,
    /// Cosine similarity to the query, higher is closer.
    pub score: f32,
}

/// Chunking strategy trait.
pub trait Chunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk>;
}

/// Embedding model abstraction.
pub trait EmbeddingModel {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RetrievalError>;
    fn dimension(&self) -> usize;
}
