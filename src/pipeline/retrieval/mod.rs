pub mod chunker;
pub mod embedder;
pub mod index;
pub mod retriever;
pub mod types;

pub use chunker::WindowChunker;
pub use embedder::{global_embedder, HashEmbedder, EMBEDDING_DIM};
pub use index::FlatIndex;
pub use retriever::{retrieve, RetrievedContext};
pub use types::{Chunker, EmbeddingModel, ScoredChunk, TextChunk};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Embedding model not found: {0}")]
    ModelNotFound(PathBuf),

    #[error("Embedding model initialization: {0}")]
    ModelInit(String),

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("Chunk count ({chunks}) does not match embedding count ({embeddings})")]
    CountMismatch { chunks: usize, embeddings: usize },

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
