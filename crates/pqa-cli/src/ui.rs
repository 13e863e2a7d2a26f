//! Console UI: banner, question input with history, exit words

use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};

use pqa_core::Result;

/// Display the startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(58, terminal_width.saturating_sub(4));
    let inner = banner_width.saturating_sub(2);

    let top_border = format!("┌{}┐", "─".repeat(inner));
    let bottom_border = format!("└{}┘", "─".repeat(inner));
    let empty_line = format!("│{}│", " ".repeat(inner));

    let lines = [
        "PQA — Perguntas sobre o seu PDF",
        "",
        "Responde somente com base no documento ingerido.",
        "Digite 'sair', 'exit' ou ':q' para encerrar.",
    ];

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());
    for line in lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let padding = inner.saturating_sub(line.chars().count() + 2);
            println!("{}", format!("│  {line}{}│", " ".repeat(padding)).blue());
        }
    }
    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
}

/// Whether `input` is one of the loop-terminating words
pub fn is_exit_word(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "sair" | "exit" | ":q")
}

/// Read one question, with in-session history navigation.
///
/// Returns `Ok(None)` on end of input or interrupt; the caller prints the
/// farewell. Piped stdin skips raw mode and reads lines directly.
pub async fn read_question(history: &mut Vec<String>) -> Result<Option<String>> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(Some(input));
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;

    print!("\n{} ", "PERGUNTA:".green().bold());
    io::stdout().flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match key.code {
            KeyCode::Enter => {
                disable_raw_mode()?;
                println!();
                let input = input.trim().to_string();
                if !input.is_empty() {
                    history.push(input.clone());
                }
                return Ok(Some(input));
            }
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                disable_raw_mode()?;
                println!();
                return Ok(None);
            }
            KeyCode::Char(c) => {
                input.push(c);
                print!("{c}");
                io::stdout().flush()?;
            }
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    redraw_line(&input)?;
                }
            }
            KeyCode::Up => {
                if history.is_empty() {
                    continue;
                }
                let next = match history_index {
                    None => history.len() - 1,
                    Some(0) => 0,
                    Some(i) => i - 1,
                };
                history_index = Some(next);
                input = history[next].clone();
                redraw_line(&input)?;
            }
            KeyCode::Down => {
                let Some(current) = history_index else {
                    continue;
                };
                if current + 1 < history.len() {
                    history_index = Some(current + 1);
                    input = history[current + 1].clone();
                } else {
                    history_index = None;
                    input.clear();
                }
                redraw_line(&input)?;
            }
            KeyCode::Esc => {
                history_index = None;
                input.clear();
                redraw_line(&input)?;
            }
            _ => {}
        }
    }
}

fn redraw_line(input: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    print!("{} {input}", "PERGUNTA:".green().bold());
    stdout.flush()
}
