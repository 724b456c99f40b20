//! CLI support for formula-lang
//!
//! Provides programmatic access to the CLI functionality for embedding
//! in other tools.

mod annotate;
mod tokens;

pub use annotate::{execute_annotate, AnnotateOptions};
pub use tokens::{execute_tokens, TokensOptions};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// IO error
    Io(io::Error),
    /// No formula provided
    NoFormula,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoFormula => {
                write!(f, "No formula provided. Pass one as an argument or pipe it to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
