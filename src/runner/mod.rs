//! Sequence execution.
//!
//! - [`StepExecutor`] - What the runner needs from the instance it sequences
//! - [`Sequenced`] - Associates a type with its shared definition
//! - [`SequenceRunner`] - Dispatches steps and handles halts

pub mod executor;
pub mod sequencer;

pub use executor::{Sequenced, StepExecutor};
pub use sequencer::{Outcome, RunOptions, RunProgress, SequenceRunner};
