//! Counter demo: steps take no input and mutate instance state.

use std::sync::OnceLock;

use crate::error::StepResult;
use crate::runner::{Sequenced, StepExecutor};
use crate::sequence::{HaltState, SequenceDefinition, StepFn, StepId};

/// Adds five then ten to its own value, returning it each time.
#[derive(Debug, Default)]
pub struct Counter {
    value: i64,
    halt: HaltState,
}

impl Counter {
    /// Create a counter starting at `value`.
    pub fn new(value: i64) -> Self {
        Self {
            value,
            halt: HaltState::new(),
        }
    }

    /// Get the current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    fn adds_five_to_value(&mut self) -> StepResult<i64> {
        self.value += 5;
        Ok(self.value)
    }

    fn adds_ten_to_value(&mut self) -> StepResult<i64> {
        self.value += 10;
        Ok(self.value)
    }
}

impl StepExecutor for Counter {
    type Acc = i64;

    fn resolve(&self, step: &StepId) -> Option<StepFn<Self, i64>> {
        match step.as_str() {
            "adds_five_to_value" => Some(StepFn::Nullary(Self::adds_five_to_value)),
            "adds_ten_to_value" => Some(StepFn::Nullary(Self::adds_ten_to_value)),
            _ => None,
        }
    }

    fn halt_state(&self) -> &HaltState {
        &self.halt
    }

    fn halt_state_mut(&mut self) -> &mut HaltState {
        &mut self.halt
    }
}

impl Sequenced for Counter {
    type Output = String;

    fn definition() -> &'static SequenceDefinition<Self, String> {
        static DEFINITION: OnceLock<SequenceDefinition<Counter, String>> = OnceLock::new();
        DEFINITION.get_or_init(|| {
            SequenceDefinition::builder()
                .add_step("adds_five_to_value")
                .add_step("adds_ten_to_value")
                .on_halt(|_, reason| reason.to_string())
                .build()
        })
    }
}
