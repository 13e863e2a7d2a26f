//! Interactive console interface for PQA

mod ui;

pub use ui::{display_banner, is_exit_word, read_question};

// Re-export core types
pub use pqa_core::{Error, Result};
