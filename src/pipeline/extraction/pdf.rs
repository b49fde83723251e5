use super::types::{PageExtraction, PdfExtractor};
use super::ExtractionError;

/// PDF text extractor backed by the pdf-extract crate.
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
        let page_texts = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        Ok(page_texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageExtraction {
                page_number: i + 1,
                text,
            })
            .collect())
    }

    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
        Ok(pages.len())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a minimal single-page PDF containing `text`, using lopdf
    /// (the same library pdf-extract parses with).
    pub(crate) fn make_test_pdf(text: &str) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        // One Tj operator per line so multi-line fixtures stay on separate
        // baselines and extract as separate lines.
        let mut ops = String::from("BT /F1 12 Tf 72 720 Td 16 TL ");
        for line in text.lines() {
            let escaped = line.replace('\\', r"\\").replace('(', r"\(").replace(')', r"\)");
            ops.push_str(&format!("({escaped}) Tj T* "));
        }
        ops.push_str("ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, ops.into_bytes()));

        let resources = dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        };

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        });

        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", pages_id);
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });

        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_text_from_digital_pdf() {
        let extractor = PdfTextExtractor;
        let pdf_bytes = make_test_pdf("Hemoglobin: 10.2 g/dL");
        let pages = extractor.extract_pages(&pdf_bytes).unwrap();

        assert!(!pages.is_empty());
        let full_text: String = pages.iter().map(|p| p.text.clone()).collect();
        assert!(
            full_text.contains("Hemoglobin"),
            "expected extracted text to contain the fixture, got: {full_text}"
        );
    }

    #[test]
    fn page_numbers_start_at_one() {
        let extractor = PdfTextExtractor;
        let pages = extractor
            .extract_pages(&make_test_pdf("Test content"))
            .unwrap();
        assert_eq!(pages[0].page_number, 1);
    }

    #[test]
    fn page_count_matches_extraction() {
        let extractor = PdfTextExtractor;
        let pdf_bytes = make_test_pdf("Test content");
        let count = extractor.page_count(&pdf_bytes).unwrap();
        let pages = extractor.extract_pages(&pdf_bytes).unwrap();
        assert_eq!(count, pages.len());
    }

    #[test]
    fn invalid_pdf_returns_error() {
        let extractor = PdfTextExtractor;
        let result = extractor.extract_pages(b"not a pdf");
        assert!(matches!(result, Err(ExtractionError::PdfParsing(_))));
    }
}
