use super::types::{Chunker, TextChunk};

/// Fixed-size sliding-window chunker.
///
/// Cuts the text into `chunk_size`-character windows, each overlapping the
/// previous by `overlap` characters. The final window is kept even when
/// shorter than `chunk_size`. Chunk text is taken verbatim (no trimming),
/// so dropping the first `overlap` characters of every chunk after the
/// first and concatenating reproduces the input exactly.
pub struct WindowChunker {
    chunk_size: usize,
    overlap: usize,
}

impl WindowChunker {
    /// `overlap` must be below `chunk_size`; [`crate::config::ReportConfig::validate`]
    /// enforces this for pipeline runs.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        debug_assert!(overlap < chunk_size);
        Self {
            chunk_size,
            overlap,
        }
    }
}

impl Chunker for WindowChunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk> {
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every char boundary; windows are measured in
        // characters so multi-byte text never splits mid-character.
        let mut boundaries: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        boundaries.push(text.len());
        let total_chars = boundaries.len() - 1;

        // Saturate so a misconfigured overlap can never stall the loop.
        let step = self.chunk_size.saturating_sub(self.overlap).max(1);
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.chunk_size).min(total_chars);
            chunks.push(TextChunk {
                content: text[boundaries[start]..boundaries[end]].to_string(),
                chunk_index: chunks.len(),
                char_offset: start,
            });
            if end == total_chars {
                break;
            }
            start += step;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(chunks: &[TextChunk], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(&chunk.content);
            } else {
                out.extend(chunk.content.chars().skip(overlap));
            }
        }
        out
    }

    #[test]
    fn empty_input_produces_no_chunks() {
        let chunker = WindowChunker::new(800, 100);
        assert!(chunker.chunk("").is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let chunker = WindowChunker::new(800, 100);
        let chunks = chunker.chunk("Hemoglobin: 10.2 g/dL");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Hemoglobin: 10.2 g/dL");
        assert_eq!(chunks[0].char_offset, 0);
    }

    #[test]
    fn windows_overlap_by_configured_amount() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunker = WindowChunker::new(10, 4);
        let chunks = chunker.chunk(text);

        assert_eq!(chunks[0].content, "abcdefghij");
        assert_eq!(chunks[1].content, "ghijklmnop");
        assert_eq!(chunks[1].char_offset, 6);
        for pair in chunks.windows(2) {
            let tail: String = pair[0].content.chars().rev().take(4).collect();
            let head: String = pair[1].content.chars().take(4).collect();
            assert_eq!(tail.chars().rev().collect::<String>(), head);
        }
    }

    #[test]
    fn final_short_chunk_is_retained() {
        let text = "a".repeat(25);
        let chunker = WindowChunker::new(10, 0);
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].content.len(), 5);
    }

    #[test]
    fn chunk_indices_are_sequential() {
        let text = "x".repeat(100);
        let chunks = WindowChunker::new(10, 3).chunk(&text);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i);
        }
    }

    #[test]
    fn overlap_removed_concatenation_reconstructs_input() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
        for (size, overlap) in [(50, 10), (64, 0), (33, 32), (100, 1)] {
            let chunks = WindowChunker::new(size, overlap).chunk(&text);
            assert_eq!(
                reconstruct(&chunks, overlap),
                text,
                "reconstruction failed for size={size} overlap={overlap}"
            );
        }
    }

    #[test]
    fn last_chunk_ends_at_end_of_input() {
        let text = "0123456789".repeat(7);
        let chunks = WindowChunker::new(30, 10).chunk(&text);
        let last = chunks.last().unwrap();
        assert!(text.ends_with(&last.content));
        assert_eq!(last.char_offset + last.content.chars().count(), text.len());
    }

    #[test]
    fn multibyte_text_never_splits_mid_character() {
        let text = "µµµµµ 37.5°C élevé ".repeat(30);
        let chunks = WindowChunker::new(16, 5).chunk(&text);
        assert_eq!(reconstruct(&chunks, 5), text);
    }
}
