//! Executor capability surface.
//!
//! The runner needs two things from the instance it sequences: a way to
//! resolve step identifiers to bodies, and mutable halt state that steps can
//! set through [`StepExecutor::halt`].

use serde_json::Value;

use crate::error::Result;
use crate::sequence::{HaltReason, HaltState, SequenceDefinition, StepFn, StepId};

use super::sequencer::{Outcome, SequenceRunner};

/// An instance whose steps can be run by a [`SequenceRunner`].
pub trait StepExecutor: Sized {
    /// Value threaded through the steps.
    type Acc;

    /// Resolve a step identifier to its body.
    ///
    /// Returning `None` is a configuration error that aborts the run.
    fn resolve(&self, step: &StepId) -> Option<StepFn<Self, Self::Acc>>;

    /// Get the halt state.
    fn halt_state(&self) -> &HaltState;

    /// Get the halt state mutably.
    fn halt_state_mut(&mut self) -> &mut HaltState;

    /// Stop the sequence with an arbitrary reason.
    ///
    /// The current step still returns normally; the runner observes the
    /// halt before dispatching anything else.
    fn halt(&mut self, reason: impl Into<Value>) {
        self.halt_state_mut().halt(HaltReason::Halted(reason.into()));
    }

    /// Check if the last run halted.
    fn halted(&self) -> bool {
        self.halt_state().is_halted()
    }

    /// Get the step blamed for the halt.
    ///
    /// An explicit halt is blamed on the step that called it. A step error is
    /// blamed on the step before it, so this is `None` only when the first
    /// step failed with an error.
    fn halted_step(&self) -> Option<&StepId> {
        self.halt_state().step()
    }

    /// Get the halt reason.
    fn halted_reason(&self) -> Option<&HaltReason> {
        self.halt_state().reason()
    }
}

/// A type that owns one shared sequence definition.
///
/// Implementors typically build the definition lazily in a
/// `std::sync::OnceLock` so it is constructed once per type.
pub trait Sequenced: StepExecutor + 'static {
    /// Result type of the halt handler.
    type Output: 'static;

    /// Get the definition shared by every instance of this type.
    fn definition() -> &'static SequenceDefinition<Self, Self::Output>;

    /// Run this instance's sequence from `initial`.
    fn start_sequence(&mut self, initial: Self::Acc) -> Result<Outcome<Self::Acc, Self::Output>> {
        SequenceRunner::new(Self::definition()).run(self, initial)
    }
}
