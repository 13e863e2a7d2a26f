//! Fixed prompt template
//!
//! The template text is a compatibility contract shared with the chat
//! backends; it must be reproduced byte for byte.

pub const PROMPT_TEMPLATE: &str = r#"CONTEXTO:
{contexto}

REGRAS:
- Responda somente com base no CONTEXTO.
- Se a informação não estiver explicitamente no CONTEXTO, responda:
  "Não tenho informações necessárias para responder sua pergunta."
- Nunca invente ou use conhecimento externo.
- Nunca produza opiniões ou interpretações além do que está escrito.

EXEMPLOS DE PERGUNTAS FORA DO CONTEXTO:
Pergunta: "Qual é a capital da França?"
Resposta: "Não tenho informações necessárias para responder sua pergunta."
Pergunta: "Quantos clientes temos em 2024?"
Resposta: "Não tenho informações necessárias para responder sua pergunta."
Pergunta: "Você acha isso bom ou ruim?"
Resposta: "Não tenho informações necessárias para responder sua pergunta."

PERGUNTA DO USUÁRIO:
{pergunta}

RESPONDA A "PERGUNTA DO USUÁRIO""#;

/// Fill the template with the assembled context and the user's question
pub fn render_prompt(context: &str, question: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{contexto}", context)
        .replace("{pergunta}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_filled() {
        let prompt = render_prompt("Faturamento: R$ 1,00", "Qual o faturamento?");
        assert!(prompt.starts_with("CONTEXTO:\nFaturamento: R$ 1,00\n\nREGRAS:"));
        assert!(prompt.contains("PERGUNTA DO USUÁRIO:\nQual o faturamento?"));
        assert!(prompt.ends_with("RESPONDA A \"PERGUNTA DO USUÁRIO\""));
        assert!(!prompt.contains("{contexto}"));
        assert!(!prompt.contains("{pergunta}"));
    }

    #[test]
    fn template_keeps_the_contract_rules() {
        assert!(PROMPT_TEMPLATE.contains("- Responda somente com base no CONTEXTO."));
        assert!(PROMPT_TEMPLATE.contains("- Nunca invente ou use conhecimento externo."));
        assert!(PROMPT_TEMPLATE.contains("Pergunta: \"Qual é a capital da França?\""));
    }

    #[test]
    fn empty_context_still_renders() {
        let prompt = render_prompt("", "pergunta");
        assert!(prompt.starts_with("CONTEXTO:\n\n\nREGRAS:"));
    }
}
