//! Cross-cutting error types for kumi.
//!
//! Adapter-specific errors (`RecordsError`, `ConfigError`) live in their own
//! crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any kumi crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A computation that needs a seed selection was given none.
    #[error("No symbols found in selection {source_name}")]
    EmptySelection { source_name: String },

    /// Symbols that must be present in the corpus are missing.
    #[error("Symbols not found in corpus: {}", symbols.join(", "))]
    UnknownSymbols { symbols: Vec<String> },
}
