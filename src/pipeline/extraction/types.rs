use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Text pulled from a single PDF page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageExtraction {
    pub page_number: usize,
    pub text: String,
}

/// PDF text extraction abstraction. Implementations handle digital PDFs
/// with an embedded text layer; a scanned-image page yields empty text,
/// not an error.
pub trait PdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError>;

    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, ExtractionError>;
}
