pub mod pdf;
pub mod sanitize;
pub mod types;

pub use pdf::PdfTextExtractor;
pub use sanitize::sanitize_extracted_text;
pub use types::{PageExtraction, PdfExtractor};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),
}
