//! Error types for sequencer operations.
//!
//! This module defines [`SequencerError`], the error type returned to callers
//! of a sequence run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration defects (a step the executor cannot resolve) surface as
//!   `SequencerError` and are never routed through a halt handler
//! - Failures inside step bodies are `anyhow::Error` values ([`StepResult`])
//!   that the runner converts into halt state
//! - Use `anyhow::Error` (via `SequencerError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for sequencer operations.
#[derive(Debug, Error)]
pub enum SequencerError {
    /// A registered step identifier does not resolve on the executor.
    #[error("Method `{step}` is not defined for {owner} used in steps")]
    StepNotDefined { step: String, owner: String },

    /// Requested demo sequence does not exist.
    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sequencer operations.
pub type Result<T> = std::result::Result<T, SequencerError>;

/// Result type returned by step bodies.
///
/// Any error becomes a halt of the running sequence.
pub type StepResult<T> = std::result::Result<T, anyhow::Error>;
