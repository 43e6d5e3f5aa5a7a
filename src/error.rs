//! Typed errors surfaced by the engine facade.

use thiserror::Error;

/// Errors that can occur while turning raw text into an argument report.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input was empty or contained only whitespace.
    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    /// An argument graph invariant was violated while constructing or
    /// linking propositions.
    #[error("malformed argument graph: {detail}")]
    MalformedGraph { detail: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
