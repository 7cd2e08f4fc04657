//! Built-in demonstration sequences.
//!
//! Each demo is a [`Sequenced`] type with its own definition. [`Demo`] names
//! them for the command line and runs them into a serializable
//! [`DemoReport`].

pub mod arithmetic;
pub mod checked;
pub mod counter;
pub mod order;

pub use arithmetic::Arithmetic;
pub use checked::Checked;
pub use counter::Counter;
pub use order::Order;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SequencerError};
use crate::runner::{Outcome, Sequenced, StepExecutor};
use crate::sequence::StepId;

/// A built-in demo sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Threads an integer through arithmetic steps; halts above ten.
    Arithmetic,
    /// Appends 1..=4 to a list.
    Order,
    /// Nullary steps mutating instance state seeded from the initial value.
    Counter,
    /// Step error on a zero divisor, reported by the default handler.
    Checked,
}

impl Demo {
    /// All demos in display order.
    pub const ALL: [Demo; 4] = [Demo::Arithmetic, Demo::Order, Demo::Counter, Demo::Checked];

    /// Look up a demo by name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == name)
            .ok_or_else(|| SequencerError::UnknownDemo {
                name: name.to_string(),
            })
    }

    /// Get the demo's command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Demo::Arithmetic => "arithmetic",
            Demo::Order => "order",
            Demo::Counter => "counter",
            Demo::Checked => "checked",
        }
    }

    /// Get the demo's registered steps in order.
    pub fn steps(&self) -> &'static [StepId] {
        match self {
            Demo::Arithmetic => Arithmetic::definition().steps(),
            Demo::Order => Order::definition().steps(),
            Demo::Counter => Counter::definition().steps(),
            Demo::Checked => Checked::definition().steps(),
        }
    }

    /// Run the demo from `initial`.
    ///
    /// `order` ignores `initial` and starts from an empty list.
    pub fn run(&self, initial: i64) -> Result<DemoReport> {
        match self {
            Demo::Arithmetic => {
                let mut seq = Arithmetic::new();
                let outcome = seq.start_sequence(initial)?;
                DemoReport::new(*self, &seq, outcome)
            }
            Demo::Order => {
                let mut seq = Order::new();
                let outcome = seq.start_sequence(Vec::new())?;
                DemoReport::new(*self, &seq, outcome)
            }
            Demo::Counter => {
                let mut seq = Counter::new(initial);
                let outcome = seq.start_sequence(initial)?;
                DemoReport::new(*self, &seq, outcome)
            }
            Demo::Checked => {
                let mut seq = Checked::new();
                let outcome = seq.start_sequence(initial)?;
                DemoReport::new(*self, &seq, outcome)
            }
        }
    }
}

/// Serializable summary of a demo run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    /// Demo name.
    pub demo: String,
    /// Whether the sequence halted.
    pub halted: bool,
    /// Step blamed for the halt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halted_step: Option<StepId>,
    /// Halt reason as a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halted_reason: Option<Value>,
    /// Final accumulator, or the halt handler's result.
    pub result: Value,
}

impl DemoReport {
    fn new<E, A, O>(demo: Demo, executor: &E, outcome: Outcome<A, O>) -> Result<Self>
    where
        E: StepExecutor,
        A: Serialize,
        O: Serialize,
    {
        let halted = outcome.is_halted();
        let result = match outcome {
            Outcome::Completed(acc) => serde_json::to_value(acc),
            Outcome::Halted(out) => serde_json::to_value(out),
        }
        .map_err(anyhow::Error::from)?;

        Ok(Self {
            demo: demo.name().to_string(),
            halted,
            halted_step: halted.then(|| executor.halted_step().cloned()).flatten(),
            halted_reason: halted
                .then(|| executor.halted_reason().map(|r| r.to_value()))
                .flatten(),
            result,
        })
    }

    /// One-line human summary.
    pub fn summary_line(&self) -> String {
        if self.halted {
            let step = self.halted_step.as_ref().map_or("<none>", StepId::as_str);
            format!("{} halted after {} => {}", self.demo, step, self.result)
        } else {
            format!("{} completed => {}", self.demo, self.result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_name_finds_every_demo() {
        for demo in Demo::ALL {
            assert_eq!(Demo::from_name(demo.name()).unwrap(), demo);
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        let err = Demo::from_name("nope").unwrap_err();
        assert!(matches!(err, SequencerError::UnknownDemo { .. }));
    }

    #[test]
    fn steps_come_from_definitions() {
        let names: Vec<&str> = Demo::Counter.steps().iter().map(StepId::as_str).collect();
        assert_eq!(names, vec!["adds_five_to_value", "adds_ten_to_value"]);
    }

    #[test]
    fn completed_report() {
        let report = Demo::Arithmetic.run(1).unwrap();
        assert!(!report.halted);
        assert_eq!(report.result, json!(6));
        assert!(report.halted_step.is_none());
        assert_eq!(report.summary_line(), "arithmetic completed => 6");
    }

    #[test]
    fn halted_report() {
        let report = Demo::Checked.run(-5).unwrap();
        assert!(report.halted);
        assert_eq!(report.halted_step.as_ref().unwrap(), "add_five");
        assert_eq!(report.halted_reason, Some(json!("division by zero")));
        assert_eq!(report.result, json!({"add_five": "division by zero"}));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot serialize result"))
        }
    }

    #[test]
    fn unserializable_result_is_an_error() {
        let seq = Order::new();
        let outcome: Outcome<Unserializable, ()> = Outcome::Completed(Unserializable);
        let err = DemoReport::new(Demo::Order, &seq, outcome).unwrap_err();
        assert!(matches!(err, SequencerError::Other(_)));
        assert!(err.to_string().contains("cannot serialize result"));
    }

    #[test]
    fn report_serializes_without_empty_halt_fields() {
        let report = Demo::Order.run(0).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({"demo": "order", "halted": false, "result": [1, 2, 3, 4]})
        );
    }
}
