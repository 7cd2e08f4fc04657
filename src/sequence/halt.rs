//! Halt reasons and per-instance halt state.

use std::fmt;

use serde_json::Value;

use super::step::StepId;

/// Why a sequence stopped early.
///
/// Explicit halts carry an arbitrary value. Step errors keep the original
/// error so handlers can inspect its chain, while [`HaltReason::to_value`]
/// and `Display` render it as its message text.
#[derive(Debug)]
pub enum HaltReason {
    /// A step called `halt` with this value.
    Halted(Value),
    /// A step returned this error.
    Failed(anyhow::Error),
}

impl HaltReason {
    /// Get the reason as a JSON value.
    ///
    /// A failure renders as a string holding the error message.
    pub fn to_value(&self) -> Value {
        match self {
            HaltReason::Halted(value) => value.clone(),
            HaltReason::Failed(err) => Value::String(err.to_string()),
        }
    }

    /// Get the originating step error, if the halt came from one.
    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            HaltReason::Halted(_) => None,
            HaltReason::Failed(err) => Some(err),
        }
    }

    /// Check if this halt was caused by a step error.
    pub fn is_failure(&self) -> bool {
        matches!(self, HaltReason::Failed(_))
    }
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaltReason::Halted(Value::String(s)) => f.write_str(s),
            HaltReason::Halted(value) => write!(f, "{}", value),
            HaltReason::Failed(err) => write!(f, "{}", err),
        }
    }
}

impl PartialEq<Value> for HaltReason {
    fn eq(&self, other: &Value) -> bool {
        self.to_value() == *other
    }
}

impl From<anyhow::Error> for HaltReason {
    fn from(err: anyhow::Error) -> Self {
        HaltReason::Failed(err)
    }
}

/// Halt bookkeeping owned by the instance being sequenced.
///
/// Lives on the executor rather than the runner so callers can inspect it
/// once a run has returned.
#[derive(Debug, Default)]
pub struct HaltState {
    step: Option<StepId>,
    reason: Option<HaltReason>,
}

impl HaltState {
    /// Create a cleared halt state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the sequence halted. A later call replaces the reason.
    pub fn halt(&mut self, reason: HaltReason) {
        self.reason = Some(reason);
    }

    /// Check if a halt has been requested.
    pub fn is_halted(&self) -> bool {
        self.reason.is_some()
    }

    /// Get the step blamed for the halt.
    ///
    /// `None` until the runner observes the halt, and also when the very
    /// first step failed with an error.
    pub fn step(&self) -> Option<&StepId> {
        self.step.as_ref()
    }

    /// Get the recorded halt reason.
    pub fn reason(&self) -> Option<&HaltReason> {
        self.reason.as_ref()
    }

    pub(crate) fn record_step(&mut self, step: Option<StepId>) {
        self.step = step;
    }

    /// Clear all halt bookkeeping.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
