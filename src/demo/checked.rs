//! Checked-division demo: a failing step halts through the default handler.

use std::sync::OnceLock;

use anyhow::ensure;

use crate::error::StepResult;
use crate::runner::{Sequenced, StepExecutor};
use crate::sequence::{HaltMap, HaltState, SequenceDefinition, StepFn, StepId};

/// Adds five, divides 100 by the total, subtracts three.
///
/// No halt handler is registered, so a zero divisor produces
/// `{ "add_five": "division by zero" }`.
#[derive(Debug, Default)]
pub struct Checked {
    halt: HaltState,
}

impl Checked {
    /// Create a fresh instance.
    pub fn new() -> Self {
        Self::default()
    }

    fn add_five(&mut self, n: i64) -> StepResult<i64> {
        Ok(n + 5)
    }

    fn divide_hundred(&mut self, n: i64) -> StepResult<i64> {
        ensure!(n != 0, "division by zero");
        Ok(100 / n)
    }

    fn subtract_three(&mut self, n: i64) -> StepResult<i64> {
        Ok(n - 3)
    }
}

impl StepExecutor for Checked {
    type Acc = i64;

    fn resolve(&self, step: &StepId) -> Option<StepFn<Self, i64>> {
        match step.as_str() {
            "add_five" => Some(StepFn::Unary(Self::add_five)),
            "divide_hundred" => Some(StepFn::Unary(Self::divide_hundred)),
            "subtract_three" => Some(StepFn::Unary(Self::subtract_three)),
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

impl Sequenced for Checked {
    type Output = HaltMap;

    fn definition() -> &'static SequenceDefinition<Self> {
        static DEFINITION: OnceLock<SequenceDefinition<Checked>> = OnceLock::new();
        DEFINITION.get_or_init(|| {
            SequenceDefinition::builder()
                .add_steps(["add_five", "divide_hundred", "subtract_three"])
                .build()
        })
    }
}
