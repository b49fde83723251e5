//! Report processing orchestrator.
//!
//! Single entry point that drives the full pipeline for one report:
//! extract text → sanitize → chunk → embed → index → retrieve context →
//! extract parameters → classify → compose.
//!
//! Uses trait-based DI for the PDF extractor and the embedding model so
//! the orchestrator stays fully testable without real PDFs or a real
//! model on disk.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::{ConfigError, ReportConfig};
use crate::models::ReportAnalysis;
use crate::pipeline::analysis::{classify, compose, extract_parameters};
use crate::pipeline::extraction::{
    sanitize_extracted_text, ExtractionError, PdfExtractor, PdfTextExtractor,
};
use crate::pipeline::retrieval::{
    global_embedder, retrieve, Chunker, EmbeddingModel, FlatIndex, RetrievalError,
    RetrievedContext, WindowChunker,
};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort processing of one report. Everything else in the
/// pipeline degrades to a partial or empty result instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    /// The document parsed but produced no text (e.g. a scanned image).
    #[error("No readable content in document")]
    NoReadableContent,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Stage counters for one run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
    /// Pages in the source PDF; 0 when raw text was analyzed directly.
    pub page_count: usize,
    pub text_chars: usize,
    pub chunk_count: usize,
    pub retrieved_chunks: usize,
    pub parameters_found: usize,
}

/// Everything one run produces: the composed analysis, the retrieved
/// context it can be displayed with, and stage counters.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    pub analysis: ReportAnalysis,
    pub context: RetrievedContext,
    pub summary: ProcessingSummary,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

pub struct ReportProcessor {
    extractor: Box<dyn PdfExtractor + Send + Sync>,
    embedder: Arc<dyn EmbeddingModel + Send + Sync>,
    config: ReportConfig,
}

impl ReportProcessor {
    /// Build a processor from explicit parts. Validates the config.
    pub fn new(
        extractor: Box<dyn PdfExtractor + Send + Sync>,
        embedder: Arc<dyn EmbeddingModel + Send + Sync>,
        config: ReportConfig,
    ) -> Result<Self, ProcessingError> {
        config.validate()?;
        Ok(Self {
            extractor,
            embedder,
            config,
        })
    }

    /// The production wiring: pdf-extract text extraction and the shared
    /// process-wide embedding model.
    pub fn with_defaults(config: ReportConfig) -> Result<Self, ProcessingError> {
        Self::new(Box::new(PdfTextExtractor), global_embedder(), config)
    }

    pub fn process_file(&self, path: &Path) -> Result<ReportOutcome, ProcessingError> {
        let bytes = std::fs::read(path)?;
        self.process_bytes(&bytes)
    }

    /// Full pipeline from PDF bytes.
    pub fn process_bytes(&self, pdf_bytes: &[u8]) -> Result<ReportOutcome, ProcessingError> {
        let pages = self.extractor.extract_pages(pdf_bytes)?;
        let page_count = pages.len();
        info!(page_count, "extracted text from PDF");

        let raw: String = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        self.run(&raw, page_count)
    }

    /// Analyze already-extracted report text (no PDF parsing).
    pub fn process_text(&self, raw_text: &str) -> Result<ReportOutcome, ProcessingError> {
        self.run(raw_text, 0)
    }

    fn run(&self, raw_text: &str, page_count: usize) -> Result<ReportOutcome, ProcessingError> {
        let text = sanitize_extracted_text(raw_text);
        if text.is_empty() {
            return Err(ProcessingError::NoReadableContent);
        }

        // Retrieval: chunk, embed, index, query. The index lives only for
        // this call.
        let chunker = WindowChunker::new(self.config.chunk_size, self.config.chunk_overlap);
        let chunks = chunker.chunk(&text);
        let chunk_count = chunks.len();

        let chunk_texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&chunk_texts)?;
        let index = FlatIndex::build(chunks, embeddings)?;

        let context = retrieve(
            self.config.focus_query(),
            self.embedder.as_ref(),
            &index,
            self.config.top_k,
        )?;
        info!(
            chunk_count,
            retrieved = context.chunks.len(),
            "retrieval complete"
        );

        // Analysis runs over the full sanitized text, so results never
        // depend on which chunks the embedding model ranked highest.
        let parameters = extract_parameters(&text);
        let results: Vec<_> = parameters.iter().filter_map(classify).collect();
        let analysis = compose(Uuid::new_v4(), &results);
        info!(
            parameters_found = analysis.total_findings,
            urgent = analysis.urgent_findings.len(),
            "analysis complete"
        );

        Ok(ReportOutcome {
            summary: ProcessingSummary {
                page_count,
                text_chars: text.chars().count(),
                chunk_count,
                retrieved_chunks: context.chunks.len(),
                parameters_found: analysis.total_findings,
            },
            context,
            analysis,
        })
    }
}
