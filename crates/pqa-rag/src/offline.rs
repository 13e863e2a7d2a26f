//! Rule-based offline answering
//!
//! Used when no chat backend is configured. Deterministic and conservative:
//! it only answers revenue-style questions whose value is literally present
//! in the context, and refuses everything else.

use regex::Regex;
use std::sync::LazyLock;

/// Fixed refusal string returned whenever the context cannot answer
pub const NOT_ENOUGH: &str = "Não tenho informações necessárias para responder sua pergunta.";

// Known limitation, kept on purpose: the optional preposition group can make
// the entity capture land on "da"/"de" itself for questions like "qual o
// faturamento da EmpresaX?". The matching behavior is part of the contract.
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)faturamento.*?(?:empresa|da|de)?\s*([A-Za-z0-9_.\-]+)")
        .expect("static entity pattern")
});

// ex.: R$ 10.000.000,00
static CURRENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\$\s?[\d.,]+").expect("static currency pattern"));

const OUT_OF_CONTEXT_EXAMPLES: [&str; 3] = [
    "capital da frança",
    "quantos clientes temos em 2024",
    "você acha isso bom ou ruim",
];

/// Answer `question` using only literal evidence from `context`.
///
/// Never fails; malformed input degrades to the refusal string.
pub fn offline_answer(context: &str, question: &str) -> String {
    if context.trim().is_empty() {
        return NOT_ENOUGH.to_string();
    }

    let question_lower = question.to_lowercase();

    if question_lower.contains("faturamento") {
        let entity = ENTITY_PATTERN
            .captures(question)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_lowercase());

        let lines: Vec<&str> = context
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        // prefer lines mentioning the extracted entity
        if let Some(entity) = &entity {
            for line in &lines {
                if line.to_lowercase().contains(entity) {
                    if let Some(m) = CURRENCY_PATTERN.find(line) {
                        return revenue_sentence(m.as_str());
                    }
                }
            }
        }

        // otherwise any monetary value in the context, first line wins
        for line in &lines {
            if let Some(m) = CURRENCY_PATTERN.find(line) {
                return revenue_sentence(m.as_str());
            }
        }

        return NOT_ENOUGH.to_string();
    }

    if OUT_OF_CONTEXT_EXAMPLES
        .iter()
        .any(|example| question_lower.contains(example))
    {
        return NOT_ENOUGH.to_string();
    }

    // conservative default: no generic keyword matching
    NOT_ENOUGH.to_string()
}

/// Render the matched currency value with exactly one space after "R$"
fn revenue_sentence(value: &str) -> String {
    let amount = value.trim_start_matches("R$").trim_start();
    format!("O faturamento foi de R$ {amount}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_refuses() {
        assert_eq!(offline_answer("", "Qual o faturamento da EmpresaX?"), NOT_ENOUGH);
        assert_eq!(offline_answer("   \n ", "qualquer pergunta"), NOT_ENOUGH);
    }

    #[test]
    fn revenue_with_entity_returns_the_matching_line_value() {
        let context = "Faturamento da EmpresaX: R$ 10.000.000,00";
        let question = "Qual o faturamento da EmpresaX?";
        assert_eq!(
            offline_answer(context, question),
            "O faturamento foi de R$ 10.000.000,00."
        );
    }

    #[test]
    fn revenue_prefers_entity_line_over_earlier_values() {
        let context = "Despesas gerais: R$ 5.000,00\nFaturamento da EmpresaX: R$ 10.000.000,00";
        let question = "Qual o faturamento da EmpresaX?";
        assert_eq!(
            offline_answer(context, question),
            "O faturamento foi de R$ 10.000.000,00."
        );
    }

    #[test]
    fn revenue_without_entity_takes_the_first_currency_match() {
        let context = "Receita consolidada: R$ 2.500,00\nOutro valor: R$ 9,99";
        let question = "Qual foi o faturamento?";
        assert_eq!(
            offline_answer(context, question),
            "O faturamento foi de R$ 2.500,00."
        );
    }

    #[test]
    fn currency_without_space_is_normalized_to_one_space() {
        let context = "Faturamento da EmpresaX: R$10.000,00";
        let question = "Qual o faturamento da EmpresaX?";
        assert_eq!(
            offline_answer(context, question),
            "O faturamento foi de R$ 10.000,00."
        );
    }

    #[test]
    fn revenue_question_without_any_value_refuses() {
        assert_eq!(
            offline_answer("Nenhum valor aqui.", "Qual o faturamento?"),
            NOT_ENOUGH
        );
    }

    #[test]
    fn known_out_of_context_questions_refuse() {
        let context = "Faturamento da EmpresaX: R$ 10.000.000,00";
        assert_eq!(
            offline_answer(context, "Qual é a capital da França?"),
            NOT_ENOUGH
        );
        assert_eq!(
            offline_answer(context, "Quantos clientes temos em 2024?"),
            NOT_ENOUGH
        );
        assert_eq!(
            offline_answer(context, "Você acha isso bom ou ruim?"),
            NOT_ENOUGH
        );
    }

    #[test]
    fn anything_else_refuses_by_default() {
        let context = "A sede fica em São Paulo.";
        assert_eq!(offline_answer(context, "Onde fica a sede?"), NOT_ENOUGH);
    }

    #[test]
    fn answers_are_idempotent() {
        let context = "Faturamento da EmpresaX: R$ 10.000.000,00";
        let question = "Qual o faturamento da EmpresaX?";
        assert_eq!(
            offline_answer(context, question),
            offline_answer(context, question)
        );
    }

    #[test]
    fn entity_capture_keeps_the_preposition_quirk() {
        // "da" is captured as the entity; any line containing "da" plus a
        // value satisfies the match, which is the preserved behavior
        let context = "Receita da filial: R$ 7,00";
        let question = "Qual o faturamento da EmpresaY?";
        assert_eq!(
            offline_answer(context, question),
            "O faturamento foi de R$ 7,00."
        );
    }
}
