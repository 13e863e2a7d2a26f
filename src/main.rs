use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use pqa_cli::{display_banner, is_exit_word, read_question};
use pqa_core::Settings;
use pqa_rag::{Answerer, ingest};

#[derive(Parser)]
#[command(name = "pqa")]
#[command(about = "Perguntas e respostas sobre um PDF, direto do terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingere o PDF configurado no banco vetorial
    Ingest,
    /// Responde uma única pergunta
    Ask {
        question: String,
        /// Quantidade de trechos recuperados
        #[arg(short, long, default_value_t = 10)]
        k: usize,
        /// Mostra o prompt preenchido em vez de chamar o modelo
        #[arg(long)]
        prompt_only: bool,
    },
    /// Loop interativo de perguntas
    Chat {
        /// Quantidade de trechos recuperados
        #[arg(short, long, default_value_t = 10)]
        k: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Ingest => {
            let report = ingest(&settings).await?;
            println!("[ingest] Páginas carregadas: {}", report.pages);
            println!("[ingest] Chunks gravados: {}", report.chunks);
            if report.dimension > 0 {
                println!("[ingest] Dimensão dos vetores: {}", report.dimension);
            }
            println!("{}", "[ingest] Concluído!".green());
        }
        Command::Ask {
            question,
            k,
            prompt_only,
        } => {
            let answerer = Answerer::new(&settings);
            let output = if prompt_only {
                answerer.search_prompt(&question, k, settings.debug).await?
            } else {
                answerer.answer(&question, k, settings.debug).await?
            };
            println!("{output}");
        }
        Command::Chat { k } => run_chat(&settings, k).await?,
    }

    Ok(())
}

async fn run_chat(settings: &Settings, k: usize) -> Result<()> {
    display_banner();
    println!("Digite sua pergunta (ou 'sair' para encerrar).");

    let answerer = Answerer::new(settings);
    let mut history = Vec::new();

    loop {
        let Some(question) = read_question(&mut history).await? else {
            println!("\nSaindo...");
            break;
        };

        if question.is_empty() {
            continue;
        }
        if is_exit_word(&question) {
            println!("Saindo...");
            break;
        }

        match answerer.answer(&question, k, settings.debug).await {
            Ok(answer) => println!("RESPOSTA: {answer}"),
            Err(err) => eprintln!("{} {err}", "erro:".red().bold()),
        }
    }

    Ok(())
}
