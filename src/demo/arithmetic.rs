//! Arithmetic demo: halts explicitly when the running total exceeds ten.

use std::sync::OnceLock;

use crate::error::StepResult;
use crate::runner::{Sequenced, StepExecutor};
use crate::sequence::{HaltState, SequenceDefinition, StepFn, StepId};

/// Adds five, checks the limit, subtracts three, doubles.
#[derive(Debug, Default)]
pub struct Arithmetic {
    halt: HaltState,
}

impl Arithmetic {
    /// Create a fresh instance.
    pub fn new() -> Self {
        Self::default()
    }

    fn add_five(&mut self, n: i64) -> StepResult<i64> {
        Ok(n + 5)
    }

    fn halts_if_greater_than_ten(&mut self, n: i64) -> StepResult<i64> {
        if n > 10 {
            self.halt("value is greater than 10");
        }
        Ok(n)
    }

    fn subtract_three(&mut self, n: i64) -> StepResult<i64> {
        Ok(n - 3)
    }

    fn multiply_by_two(&mut self, n: i64) -> StepResult<i64> {
        Ok(n * 2)
    }
}

impl StepExecutor for Arithmetic {
    type Acc = i64;

    fn resolve(&self, step: &StepId) -> Option<StepFn<Self, i64>> {
        match step.as_str() {
            "add_five" => Some(StepFn::Unary(Self::add_five)),
            "halts_if_greater_than_ten" => Some(StepFn::Unary(Self::halts_if_greater_than_ten)),
            "subtract_three" => Some(StepFn::Unary(Self::subtract_three)),
            "multiply_by_two" => Some(StepFn::Unary(Self::multiply_by_two)),
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

impl Sequenced for Arithmetic {
    type Output = String;

    fn definition() -> &'static SequenceDefinition<Self, String> {
        static DEFINITION: OnceLock<SequenceDefinition<Arithmetic, String>> = OnceLock::new();
        DEFINITION.get_or_init(|| {
            SequenceDefinition::builder()
                .add_step("add_five")
                .add_step("halts_if_greater_than_ten")
                .add_step("subtract_three")
                .add_step("multiply_by_two")
                .on_halt(|step, reason| match step {
                    Some(step) => format!("{}: {}", step, reason),
                    None => reason.to_string(),
                })
                .build()
        })
    }
}
