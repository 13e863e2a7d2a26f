//! Context assembly from retrieved chunks

use pqa_core::ScoredChunk;

/// Literal separator placed between surviving chunk texts
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Concatenate retrieved chunk texts into the CONTEXTO block.
///
/// Pure function: trims each chunk, drops chunks that are empty after
/// trimming, joins the survivors in retrieval order. Empty input yields the
/// empty string.
pub fn build_context(results: &[ScoredChunk]) -> String {
    results
        .iter()
        .map(|result| result.content.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chunk(content: &str) -> ScoredChunk {
        ScoredChunk {
            content: content.to_string(),
            metadata: json!({}),
            score: 0.1,
        }
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn blank_chunks_are_dropped() {
        let results = vec![chunk("   "), chunk("text")];
        assert_eq!(build_context(&results), "text");
    }

    #[test]
    fn all_blank_chunks_yield_empty_string() {
        let results = vec![chunk(""), chunk("  \n ")];
        assert_eq!(build_context(&results), "");
    }

    #[test]
    fn order_is_preserved_and_separator_is_literal() {
        let results = vec![chunk("a"), chunk("b")];
        assert_eq!(build_context(&results), "a\n\n---\n\nb");
    }

    #[test]
    fn chunk_text_is_trimmed() {
        let results = vec![chunk("  primeiro \n"), chunk("\tsegundo  ")];
        assert_eq!(build_context(&results), "primeiro\n\n---\n\nsegundo");
    }
}
