//! Step identifiers and declared step shapes.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StepResult;

/// Opaque name of a step.
///
/// Identifiers are resolved against an executor at run time, so a
/// definition may name a step the executor does not implement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Create a step identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StepId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Whether a step consumes the incoming accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepShape {
    /// Takes no input; the accumulator is discarded before the call.
    Nullary,
    /// Takes the current accumulator.
    Unary,
}

impl fmt::Display for StepShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepShape::Nullary => "nullary",
            StepShape::Unary => "unary",
        };
        write!(f, "{}", s)
    }
}

/// A resolved step body on executor `E` threading accumulator `A`.
///
/// Either way, the returned value becomes the new accumulator.
pub enum StepFn<E, A> {
    /// Step that ignores the accumulator.
    Nullary(fn(&mut E) -> StepResult<A>),
    /// Step that consumes the accumulator.
    Unary(fn(&mut E, A) -> StepResult<A>),
}

impl<E, A> StepFn<E, A> {
    /// Get the declared shape of this step.
    pub fn shape(&self) -> StepShape {
        match self {
            StepFn::Nullary(_) => StepShape::Nullary,
            StepFn::Unary(_) => StepShape::Unary,
        }
    }

    /// Invoke the step against `executor` with the current accumulator.
    pub fn invoke(&self, executor: &mut E, accumulator: A) -> StepResult<A> {
        match self {
            StepFn::Nullary(f) => {
                drop(accumulator);
                f(executor)
            }
            StepFn::Unary(f) => f(executor, accumulator),
        }
    }
}

impl<E, A> Clone for StepFn<E, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, A> Copy for StepFn<E, A> {}

impl<E, A> fmt::Debug for StepFn<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StepFn").field(&self.shape()).finish()
    }
}
