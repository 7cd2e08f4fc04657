//! Ordering demo: each step appends its number to a list.

use std::sync::OnceLock;

use crate::error::StepResult;
use crate::runner::{Sequenced, StepExecutor};
use crate::sequence::{HaltState, SequenceDefinition, StepFn, StepId};

/// Pushes 1 through 4 onto the accumulated list.
#[derive(Debug, Default)]
pub struct Order {
    halt: HaltState,
}

impl Order {
    /// Create a fresh instance.
    pub fn new() -> Self {
        Self::default()
    }

    fn pushes_1(&mut self, mut list: Vec<i64>) -> StepResult<Vec<i64>> {
        list.push(1);
        Ok(list)
    }

    fn pushes_2(&mut self, mut list: Vec<i64>) -> StepResult<Vec<i64>> {
        list.push(2);
        Ok(list)
    }

    fn pushes_3(&mut self, mut list: Vec<i64>) -> StepResult<Vec<i64>> {
        list.push(3);
        Ok(list)
    }

    fn pushes_4(&mut self, mut list: Vec<i64>) -> StepResult<Vec<i64>> {
        list.push(4);
        Ok(list)
    }
}

impl StepExecutor for Order {
    type Acc = Vec<i64>;

    fn resolve(&self, step: &StepId) -> Option<StepFn<Self, Vec<i64>>> {
        match step.as_str() {
            "pushes_1" => Some(StepFn::Unary(Self::pushes_1)),
            "pushes_2" => Some(StepFn::Unary(Self::pushes_2)),
            "pushes_3" => Some(StepFn::Unary(Self::pushes_3)),
            "pushes_4" => Some(StepFn::Unary(Self::pushes_4)),
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

impl Sequenced for Order {
    type Output = String;

    fn definition() -> &'static SequenceDefinition<Self, String> {
        static DEFINITION: OnceLock<SequenceDefinition<Order, String>> = OnceLock::new();
        DEFINITION.get_or_init(|| {
            SequenceDefinition::builder()
                .add_steps(["pushes_1", "pushes_2", "pushes_3", "pushes_4"])
                .on_halt(|step, reason| {
                    format!("{}: {}", step.map_or("<none>", StepId::as_str), reason)
                })
                .build()
        })
    }
}
