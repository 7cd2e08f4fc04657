//! Step Sequencer - ordered step execution with structured halting.
//!
//! A sequence is an ordered list of named steps plus one halt handler. Each
//! run threads an accumulator through the steps in order. A step can stop
//! the run early by calling `halt` or by returning an error; the halt handler
//! then receives the step that last completed and the reason, and its result
//! becomes the result of the run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface for the demo binary
//! - [`demo`] - Built-in demonstration sequences
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Executor capability traits and the run loop
//! - [`sequence`] - Step identifiers, definitions and halt state
//!
//! # Example
//!
//! ```
//! use step_sequencer::runner::{Outcome, SequenceRunner, StepExecutor};
//! use step_sequencer::sequence::{HaltState, SequenceDefinition, StepFn, StepId};
//! use step_sequencer::StepResult;
//!
//! #[derive(Default)]
//! struct Doubler {
//!     halt: HaltState,
//! }
//!
//! impl Doubler {
//!     fn double(&mut self, n: i32) -> StepResult<i32> {
//!         if n > 100 {
//!             self.halt("too large");
//!         }
//!         Ok(n * 2)
//!     }
//! }
//!
//! impl StepExecutor for Doubler {
//!     type Acc = i32;
//!
//!     fn resolve(&self, step: &StepId) -> Option<StepFn<Self, i32>> {
//!         (step == "double").then_some(StepFn::Unary(Self::double))
//!     }
//!
//!     fn halt_state(&self) -> &HaltState {
//!         &self.halt
//!     }
//!
//!     fn halt_state_mut(&mut self) -> &mut HaltState {
//!         &mut self.halt
//!     }
//! }
//!
//! let definition = SequenceDefinition::<Doubler>::builder()
//!     .add_step("double")
//!     .add_step("double")
//!     .on_halt(|step, reason| format!("{}: {}", step.unwrap(), reason))
//!     .build();
//! let runner = SequenceRunner::new(&definition);
//!
//! assert_eq!(runner.run(&mut Doubler::default(), 3).unwrap(), Outcome::Completed(12));
//! assert_eq!(
//!     runner.run(&mut Doubler::default(), 101).unwrap(),
//!     Outcome::Halted("double: too large".to_string())
//! );
//! ```

pub mod cli;
pub mod demo;
pub mod error;
pub mod runner;
pub mod sequence;

pub use error::{Result, SequencerError, StepResult};
