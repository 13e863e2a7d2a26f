//! Recursive character splitter
//!
//! Splits page text into chunks of at most `chunk_size` characters with
//! `chunk_overlap` characters carried between neighbours, preferring to cut
//! at paragraph breaks, then line breaks, then spaces, before falling back
//! to hard character cuts. Lengths are counted in characters, not bytes, so
//! accented text never lands on a broken boundary.

/// Target chunk size in characters
pub const CHUNK_SIZE: usize = 1000;
/// Characters shared between neighbouring chunks
pub const CHUNK_OVERLAP: usize = 150;

const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Boundary-aware text splitter
#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl TextSplitter {
    /// `chunk_overlap` must be strictly smaller than `chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        assert!(
            chunk_overlap < chunk_size,
            "chunk_overlap must be smaller than chunk_size"
        );
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split `text` into trimmed, non-empty chunks in document order
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, &SEPARATORS)
            .into_iter()
            .map(|chunk| chunk.trim().to_string())
            .filter(|chunk| !chunk.is_empty())
            .collect()
    }

    fn split_recursive(&self, text: &str, separators: &[&str]) -> Vec<String> {
        if char_len(text) <= self.chunk_size {
            return vec![text.to_string()];
        }

        // First separator that actually occurs; "" always matches.
        let position = separators
            .iter()
            .position(|sep| sep.is_empty() || text.contains(sep))
            .unwrap_or(separators.len().saturating_sub(1));
        let separator = separators[position];
        let remaining = &separators[position + 1..];

        if separator.is_empty() {
            return self.hard_cut(text);
        }

        let mut chunks = Vec::new();
        let mut pending: Vec<&str> = Vec::new();
        for piece in text.split(separator) {
            if char_len(piece) <= self.chunk_size {
                pending.push(piece);
            } else {
                if !pending.is_empty() {
                    chunks.extend(self.merge(&pending, separator));
                    pending.clear();
                }
                chunks.extend(self.split_recursive(piece, remaining));
            }
        }
        if !pending.is_empty() {
            chunks.extend(self.merge(&pending, separator));
        }
        chunks
    }

    /// Greedily pack pieces into chunks, carrying `chunk_overlap` characters
    /// of trailing pieces into the next chunk.
    fn merge(&self, pieces: &[&str], separator: &str) -> Vec<String> {
        let separator_len = char_len(separator);
        let mut chunks = Vec::new();
        let mut window: Vec<&str> = Vec::new();
        let mut total = 0usize;

        for piece in pieces {
            let piece_len = char_len(piece);
            let join_len = if window.is_empty() { 0 } else { separator_len };
            if total + piece_len + join_len > self.chunk_size && !window.is_empty() {
                chunks.push(window.join(separator));
                while total > self.chunk_overlap
                    || (total + piece_len + separator_len > self.chunk_size && total > 0)
                {
                    let Some(first) = window.first() else { break };
                    total -= char_len(first)
                        + if window.len() > 1 { separator_len } else { 0 };
                    window.remove(0);
                }
            }
            window.push(piece);
            total += piece_len + if window.len() > 1 { separator_len } else { 0 };
        }

        if !window.is_empty() {
            chunks.push(window.join(separator));
        }
        chunks
    }

    /// Last resort: fixed-size character windows stepping by size - overlap
    fn hard_cut(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let step = self.chunk_size - self.chunk_overlap;
        let mut chunks = Vec::new();
        let mut start = 0usize;
        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            chunks.push(chars[start..end].iter().collect());
            if end == chars.len() {
                break;
            }
            start += step;
        }
        chunks
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(CHUNK_SIZE, CHUNK_OVERLAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let splitter = TextSplitter::default();
        assert_eq!(splitter.split("um parágrafo curto"), vec!["um parágrafo curto"]);
    }

    #[test]
    fn empty_and_whitespace_text_produce_nothing() {
        let splitter = TextSplitter::default();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split("  \n\n  ").is_empty());
    }

    #[test]
    fn chunks_never_exceed_chunk_size() {
        let splitter = TextSplitter::new(100, 20);
        let text = "palavra ".repeat(500);
        for chunk in splitter.split(&text) {
            assert!(chunk.chars().count() <= 100, "chunk too long: {chunk:?}");
        }
    }

    #[test]
    fn splitting_is_deterministic() {
        let splitter = TextSplitter::default();
        let text = "Faturamento anual. ".repeat(300);
        assert_eq!(splitter.split(&text), splitter.split(&text));
    }

    #[test]
    fn prefers_paragraph_boundaries() {
        let splitter = TextSplitter::new(60, 10);
        let first = "a".repeat(50);
        let second = "b".repeat(50);
        let text = format!("{first}\n\n{second}");
        let chunks = splitter.split(&text);
        assert_eq!(chunks, vec![first, second]);
    }

    #[test]
    fn consecutive_chunks_share_overlap() {
        let splitter = TextSplitter::new(50, 20);
        let words: Vec<String> = (0..40).map(|i| format!("w{i:02}")).collect();
        let text = words.join(" ");
        let chunks = splitter.split(&text);
        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            let tail_words: Vec<&str> = pair[0].split(' ').collect();
            let last = tail_words[tail_words.len() - 1];
            assert!(
                pair[1].contains(last),
                "expected {:?} to carry {last:?} over",
                pair[1]
            );
        }
    }

    #[test]
    fn hard_cut_handles_unbroken_runs() {
        let splitter = TextSplitter::new(100, 10);
        let text = "x".repeat(350);
        let chunks = splitter.split(&text);
        // windows start at 0, 90, 180, 270 and stop at the end of the text
        assert_eq!(chunks.len(), 4);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 100);
        }
        assert_eq!(chunks[3].chars().count(), 80);
    }

    #[test]
    fn chunk_count_depends_only_on_text_and_parameters() {
        let splitter = TextSplitter::default();
        let page = "Linha com conteúdo relevante para o relatório anual.\n".repeat(60);
        let first_run = splitter.split(&page).len();
        let second_run = splitter.split(&page).len();
        assert_eq!(first_run, second_run);
        assert!(first_run > 1);
    }
}
