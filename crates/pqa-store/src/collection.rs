//! Validated collection (table) name
//!
//! Collection names come from configuration and are spliced into SQL as
//! identifiers, so they are restricted to a safe character set up front.

use std::fmt;

use pqa_core::{Error, Result};

/// A collection name that is safe to use as a quoted SQL identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.len() <= 63
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !name.chars().next().is_some_and(|c| c.is_ascii_digit());
        if !valid {
            return Err(Error::Configuration(format!(
                "nome de coleção inválido: {name:?} (use letras, dígitos e '_', sem iniciar com dígito)"
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name rendered as a quoted SQL identifier
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
