use std::sync::{Arc, LazyLock};

use super::types::EmbeddingModel;
use super::RetrievalError;

/// Embedding dimension of all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Process-wide embedding model, loaded on first use and reused for every
/// report processed afterwards. Read-only after initialization.
static GLOBAL_EMBEDDER: LazyLock<Arc<dyn EmbeddingModel + Send + Sync>> = LazyLock::new(|| {
    #[cfg(feature = "onnx-embeddings")]
    {
        match onnx::OnnxEmbedder::load(&crate::config::embedding_model_dir()) {
            Ok(model) => {
                tracing::info!("ONNX embedder ready");
                return Arc::new(model);
            }
            Err(e) => {
                tracing::warn!("ONNX embedder unavailable ({e}), using hash embedder");
            }
        }
    }
    Arc::new(HashEmbedder::new())
});

/// The shared embedding model. The first call pays the model load; later
/// calls are free. Safe across sequential report runs.
pub fn global_embedder() -> Arc<dyn EmbeddingModel + Send + Sync> {
    GLOBAL_EMBEDDER.clone()
}

// ═══════════════════════════════════════════════════════════
// ONNX embedder, behind the `onnx-embeddings` feature
// ═══════════════════════════════════════════════════════════

#[cfg(feature = "onnx-embeddings")]
mod onnx {
    use std::path::Path;
    use std::sync::Mutex;

    use ort::session::Session;

    use super::{EmbeddingModel, RetrievalError, EMBEDDING_DIM};

    /// all-MiniLM-L6-v2 inference via ONNX Runtime: tokenize, run the
    /// transformer, mean-pool over the attention mask, L2-normalize.
    ///
    /// The session sits behind a Mutex because `Session::run` needs
    /// `&mut self` while the `EmbeddingModel` trait exposes `&self`.
    pub struct OnnxEmbedder {
        session: Mutex<Session>,
        tokenizer: tokenizers::Tokenizer,
    }

    impl OnnxEmbedder {
        /// Load from a directory containing `model.onnx` and `tokenizer.json`.
        pub fn load(model_dir: &Path) -> Result<Self, RetrievalError> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");

            for path in [&model_path, &tokenizer_path] {
                if !path.exists() {
                    return Err(RetrievalError::ModelNotFound(path.clone()));
                }
            }

            let session = Session::builder()
                .map_err(|e: ort::Error| RetrievalError::ModelInit(e.to_string()))?
                .with_intra_threads(2)
                .map_err(|e: ort::Error| RetrievalError::ModelInit(e.to_string()))?
                .commit_from_file(&model_path)
                .map_err(|e: ort::Error| {
                    RetrievalError::ModelInit(format!("ONNX load failed: {e}"))
                })?;

            let tokenizer = tokenizers::Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| RetrievalError::ModelInit(format!("Tokenizer load failed: {e}")))?;

            tracing::info!("Embedding model loaded from {}", model_dir.display());

            Ok(Self {
                session: Mutex::new(session),
                tokenizer,
            })
        }

        fn infer(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
            use ort::value::TensorRef;

            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| RetrievalError::Tokenization(e.to_string()))?;

            let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
            let attention_mask: Vec<i64> = encoding
                .get_attention_mask()
                .iter()
                .map(|&m| m as i64)
                .collect();
            let token_type_ids: Vec<i64> =
                encoding.get_type_ids().iter().map(|&t| t as i64).collect();
            let seq_len = input_ids.len();

            let as_array = |data: Vec<i64>| {
                ndarray::Array2::from_shape_vec((1, seq_len), data)
                    .map_err(|e| RetrievalError::Embedding(e.to_string()))
            };
            let ids_array = as_array(input_ids)?;
            let mask_array = as_array(attention_mask.clone())?;
            let type_array = as_array(token_type_ids)?;

            let ids_tensor = TensorRef::from_array_view(&ids_array)
                .map_err(|e| RetrievalError::Embedding(e.to_string()))?;
            let mask_tensor = TensorRef::from_array_view(&mask_array)
                .map_err(|e| RetrievalError::Embedding(e.to_string()))?;
            let type_tensor = TensorRef::from_array_view(&type_array)
                .map_err(|e| RetrievalError::Embedding(e.to_string()))?;

            let mut session = self
                .session
                .lock()
                .map_err(|_| RetrievalError::Embedding("Session lock poisoned".to_string()))?;

            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor, type_tensor])
                .map_err(|e| RetrievalError::Embedding(format!("ONNX inference failed: {e}")))?;

            // Output shape [1, seq_len, EMBEDDING_DIM]
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| RetrievalError::Embedding(format!("Output extraction: {e}")))?;
            if shape.len() != 3 || shape[2] as usize != EMBEDDING_DIM {
                return Err(RetrievalError::Embedding(format!(
                    "Unexpected output shape {shape:?}, expected [1, {seq_len}, {EMBEDDING_DIM}]"
                )));
            }

            // Mean pooling over real (unmasked) tokens
            let mut pooled = vec![0.0f32; EMBEDDING_DIM];
            let mut mask_sum = 0.0f32;
            for (token_idx, &mask_val) in attention_mask.iter().enumerate().take(seq_len) {
                let mask = mask_val as f32;
                mask_sum += mask;
                let offset = token_idx * EMBEDDING_DIM;
                for (dim, slot) in pooled.iter_mut().enumerate() {
                    *slot += data[offset + dim] * mask;
                }
            }
            if mask_sum > 0.0 {
                for v in &mut pooled {
                    *v /= mask_sum;
                }
            }

            super::l2_normalize(&mut pooled);
            Ok(pooled)
        }
    }

    impl EmbeddingModel for OnnxEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
            self.infer(text)
        }

        fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RetrievalError> {
            texts.iter().map(|t| self.infer(t)).collect()
        }

        fn dimension(&self) -> usize {
            EMBEDDING_DIM
        }
    }
}

#[cfg(feature = "onnx-embeddings")]
pub use onnx::OnnxEmbedder;

// ═══════════════════════════════════════════════════════════
// Hash embedder, deterministic fallback
// ═══════════════════════════════════════════════════════════

/// Deterministic byte-hash embedder.
///
/// Stands in when the ONNX model is not on disk (and in tests): vectors
/// are stable for identical text but carry no semantic similarity, so
/// retrieval degrades to an arbitrary-but-reproducible ordering while the
/// rest of the pipeline keeps working.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: EMBEDDING_DIM,
        }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingModel for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let bytes = text.as_bytes();
        let mut vec = vec![0.0f32; self.dimension];
        for (i, slot) in vec.iter_mut().enumerate() {
            let byte = bytes.get(i % bytes.len().max(1)).copied().unwrap_or(0);
            *slot = (byte as f32 + i as f32) / 255.0;
        }
        l2_normalize(&mut vec);
        Ok(vec)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RetrievalError> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vec {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_embed_has_model_dimension() {
        let embedder = HashEmbedder::new();
        assert_eq!(embedder.embed("Hemoglobin").unwrap().len(), EMBEDDING_DIM);
        assert_eq!(embedder.dimension(), 384);
    }

    #[test]
    fn same_text_embeds_bit_identically() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("medical test results").unwrap();
        let b = embedder.embed("medical test results").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_texts_embed_differently() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("hemoglobin low").unwrap();
        let b = embedder.embed("platelets high").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn embeddings_are_l2_normalized() {
        let embedder = HashEmbedder::new();
        let vec = embedder.embed("normalize me").unwrap();
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 0.01, "norm was {norm}");
    }

    #[test]
    fn empty_text_embeds_without_error() {
        let embedder = HashEmbedder::new();
        let vec = embedder.embed("").unwrap();
        assert_eq!(vec.len(), EMBEDDING_DIM);
    }

    #[test]
    fn batch_matches_single_embeds() {
        let embedder = HashEmbedder::new();
        let batch = embedder.embed_batch(&["one", "two"]).unwrap();
        assert_eq!(batch[0], embedder.embed("one").unwrap());
        assert_eq!(batch[1], embedder.embed("two").unwrap());
    }

    #[test]
    fn global_embedder_is_shared_and_stable() {
        let first = global_embedder();
        let second = global_embedder();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(
            first.embed("stable").unwrap(),
            second.embed("stable").unwrap()
        );
    }
}
