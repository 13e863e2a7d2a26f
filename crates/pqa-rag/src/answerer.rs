//! Question answering over retrieved context

use pqa_core::{ChatModel, Result, ScoredChunk, Settings};
use pqa_providers::select_chat;

use crate::context::build_context;
use crate::offline::offline_answer;
use crate::prompt::render_prompt;
use crate::retriever::Retriever;

/// Online path: retrieve, build context, delegate or fall back
pub struct Answerer<'a> {
    settings: &'a Settings,
}

impl<'a> Answerer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Answer `question` using the top-`k` retrieved chunks.
    ///
    /// `debug` prints each retrieved chunk's rank, score and a preview; it
    /// never changes the returned answer.
    pub async fn answer(&self, question: &str, k: usize, debug: bool) -> Result<String> {
        let results = Retriever::new(self.settings)
            .similarity_search(question, k)
            .await?;
        if debug {
            print_debug_preview(&results);
        }

        let context = build_context(&results);
        let chat = select_chat(self.settings)?;
        respond(&context, question, chat.as_deref()).await
    }

    /// Retrieve and return the filled prompt without calling any model
    pub async fn search_prompt(&self, question: &str, k: usize, debug: bool) -> Result<String> {
        let results = Retriever::new(self.settings)
            .similarity_search(question, k)
            .await?;
        if debug {
            print_debug_preview(&results);
        }
        Ok(render_prompt(&build_context(&results), question))
    }
}

/// Route a question to the chat backend, or to the offline heuristic when
/// no backend is available. The model output is returned verbatim.
pub async fn respond(
    context: &str,
    question: &str,
    chat: Option<&dyn ChatModel>,
) -> Result<String> {
    match chat {
        Some(model) => model.complete(&render_prompt(context, question)).await,
        None => Ok(offline_answer(context, question)),
    }
}

fn print_debug_preview(results: &[ScoredChunk]) {
    println!("\n[debug] top-k trechos recuperados:");
    for (rank, result) in results.iter().enumerate() {
        let preview: String = result.content.chars().take(120).collect();
        println!(
            "#{} score={:.4} | preview={:?}",
            rank + 1,
            result.score,
            preview
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::NOT_ENOUGH;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedChat {
        reply: String,
        calls: AtomicUsize,
    }

    impl CannedChat {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChatModel for CannedChat {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-model"
        }

        async fn complete(&self, prompt: &str) -> Result<String> {
            assert!(prompt.contains("CONTEXTO:"));
            assert!(prompt.contains("PERGUNTA DO USUÁRIO:"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn with_a_chat_backend_the_model_output_is_returned_verbatim() {
        let chat = CannedChat::new("  resposta crua do modelo \n");
        let answer = respond("algum contexto", "Qual é a capital da França?", Some(&chat))
            .await
            .unwrap();
        // no post-processing, even for a known out-of-context question
        assert_eq!(answer, "  resposta crua do modelo \n");
        assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn without_a_chat_backend_the_offline_heuristic_answers() {
        let context = "Faturamento da EmpresaX: R$ 10.000.000,00";
        let answer = respond(context, "Qual o faturamento da EmpresaX?", None)
            .await
            .unwrap();
        assert_eq!(answer, "O faturamento foi de R$ 10.000.000,00.");

        let refusal = respond(context, "Você acha isso bom ou ruim?", None)
            .await
            .unwrap();
        assert_eq!(refusal, NOT_ENOUGH);
    }

    #[tokio::test]
    async fn chat_backend_receives_the_filled_prompt() {
        let chat = CannedChat::new("ok");
        respond("ctx", "pergunta", Some(&chat)).await.unwrap();
        assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
    }
}
