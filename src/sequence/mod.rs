//! Sequence definitions.
//!
//! - [`SequenceDefinition`] - Ordered steps and the halt handler for one owner type
//! - [`SequenceBuilder`] - Builds a definition once, before any run
//! - [`StepId`] / [`StepFn`] - Step names and their resolved bodies
//! - [`HaltState`] / [`HaltReason`] - Per-instance halt bookkeeping

pub mod definition;
pub mod halt;
pub mod step;

pub use definition::{HaltHandler, HaltMap, SequenceBuilder, SequenceDefinition, NO_STEP_KEY};
pub use halt::{HaltReason, HaltState};
pub use step::{StepFn, StepId, StepShape};
