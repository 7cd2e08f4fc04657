//! Sequence execution.

use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::error::{Result, SequencerError};
use crate::sequence::{HaltReason, SequenceDefinition, StepId};

use super::executor::StepExecutor;

/// Progress events emitted during a run.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting {
        name: &'a StepId,
        index: usize,
        total: usize,
    },
    /// A step returned normally. It may still have requested a halt.
    StepFinished { name: &'a StepId, index: usize },
    /// A halt was observed and is about to be handed to the halt handler.
    Halted {
        step: Option<&'a StepId>,
        reason: &'a HaltReason,
    },
}

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Clear the executor's halt state before the first step.
    ///
    /// When disabled, an instance left halted by a previous run halts again
    /// immediately, blamed on no step.
    pub reset_halt_state: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            reset_halt_state: true,
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<A, O> {
    /// Every step ran; holds the final accumulator.
    Completed(A),
    /// The sequence halted; holds the halt handler's result.
    Halted(O),
}

impl<A, O> Outcome<A, O> {
    /// Check if the run halted.
    pub fn is_halted(&self) -> bool {
        matches!(self, Outcome::Halted(_))
    }

    /// Check if the run completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// Get the final accumulator, if the run completed.
    pub fn completed(self) -> Option<A> {
        match self {
            Outcome::Completed(acc) => Some(acc),
            Outcome::Halted(_) => None,
        }
    }

    /// Get the halt handler's result, if the run halted.
    pub fn halted(self) -> Option<O> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Halted(out) => Some(out),
        }
    }
}

impl<T> Outcome<T, T> {
    /// Unwrap to the inner value when both arms share a type.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Completed(v) | Outcome::Halted(v) => v,
        }
    }
}

/// Runs a [`SequenceDefinition`] against executors.
pub struct SequenceRunner<'a, E, O> {
    definition: &'a SequenceDefinition<E, O>,
}

impl<'a, E, O> SequenceRunner<'a, E, O>
where
    E: StepExecutor,
{
    /// Create a runner for a definition.
    pub fn new(definition: &'a SequenceDefinition<E, O>) -> Self {
        Self { definition }
    }

    /// Run the sequence from `initial`.
    pub fn run(&self, executor: &mut E, initial: E::Acc) -> Result<Outcome<E::Acc, O>> {
        self.run_with_progress(executor, initial, &RunOptions::default(), |_| {})
    }

    /// Run the sequence with explicit options.
    pub fn run_with_options(
        &self,
        executor: &mut E,
        initial: E::Acc,
        options: &RunOptions,
    ) -> Result<Outcome<E::Acc, O>> {
        self.run_with_progress(executor, initial, options, |_| {})
    }

    /// Run the sequence with a progress callback.
    ///
    /// Position `steps.len()` is the terminal marker: a halt requested by the
    /// last step is observed there and blamed on that step. A step error is
    /// observed at its own position and therefore blamed on the step before
    /// it. Unresolvable steps return [`SequencerError::StepNotDefined`]
    /// without touching the halt handler.
    pub fn run_with_progress(
        &self,
        executor: &mut E,
        initial: E::Acc,
        options: &RunOptions,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> Result<Outcome<E::Acc, O>> {
        if options.reset_halt_state {
            executor.halt_state_mut().reset();
        }

        let steps = self.definition.steps();
        let total = steps.len();
        let mut accumulator = initial;

        for (index, step) in steps.iter().enumerate() {
            if let Some(output) = self.observe_halt(executor, index, &mut on_progress) {
                return Ok(Outcome::Halted(output));
            }

            let body = executor
                .resolve(step)
                .ok_or_else(|| SequencerError::StepNotDefined {
                    step: step.to_string(),
                    owner: self.definition.owner().to_string(),
                })?;

            on_progress(RunProgress::StepStarting {
                name: step,
                index,
                total,
            });
            debug!(
                "Running step '{}' ({}, {}/{})",
                step,
                body.shape(),
                index + 1,
                total
            );

            accumulator = match body.invoke(executor, accumulator) {
                Ok(next) => next,
                Err(e) => {
                    warn!("Step '{}' errored: {}", step, e);
                    executor.halt_state_mut().halt(HaltReason::Failed(e));
                    // Re-check this same position: the failing step never
                    // completed, so it is not the one blamed.
                    return self
                        .observe_halt(executor, index, &mut on_progress)
                        .map(Outcome::Halted)
                        .ok_or_else(|| {
                            SequencerError::from(anyhow!(
                                "halt state lost after step '{}' failed",
                                step
                            ))
                        });
                }
            };

            on_progress(RunProgress::StepFinished { name: step, index });
        }

        if let Some(output) = self.observe_halt(executor, total, &mut on_progress) {
            return Ok(Outcome::Halted(output));
        }

        debug!(
            "Sequence for {} completed {} steps",
            self.definition.owner(),
            total
        );
        Ok(Outcome::Completed(accumulator))
    }

    /// Hand a pending halt to the halt handler, blaming the step that ran at
    /// `index - 1`.
    fn observe_halt(
        &self,
        executor: &mut E,
        index: usize,
        on_progress: &mut impl FnMut(RunProgress<'_>),
    ) -> Option<O> {
        if !executor.halt_state().is_halted() {
            return None;
        }

        let blamed = index
            .checked_sub(1)
            .and_then(|prev| self.definition.steps().get(prev))
            .cloned();
        executor.halt_state_mut().record_step(blamed);

        let state = executor.halt_state();
        let reason = state.reason()?;
        let step = state.step();

        let owner = self.definition.owner();
        match step {
            Some(step) => info!("Sequence for {} halted after '{}': {}", owner, step, reason),
            None => info!("Sequence for {} halted before any step completed: {}", owner, reason),
        }
        on_progress(RunProgress::Halted { step, reason });

        Some(self.definition.handle_halt(step, reason))
    }
}
