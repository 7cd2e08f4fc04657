//! Sequence definitions and their builder.

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};
use tracing::warn;

use super::halt::HaltReason;
use super::step::StepId;

/// Key used by the default halt handler when the first step failed.
pub const NO_STEP_KEY: &str = "<none>";

/// Result type of the default halt handler: `{ step: reason }`.
pub type HaltMap = Map<String, Value>;

/// Callable receiving the blamed step and the halt reason.
pub type HaltHandler<O> = Box<dyn Fn(Option<&StepId>, &HaltReason) -> O + Send + Sync>;

/// Ordered steps plus the halt handler for one owner type.
///
/// Built once through [`SequenceBuilder`] and immutable afterwards, so a
/// single definition can be shared by every run of its owner type.
pub struct SequenceDefinition<E, O = HaltMap> {
    owner: String,
    steps: Vec<StepId>,
    handler: HaltHandler<O>,
    custom_handler: bool,
    _executor: PhantomData<fn(&mut E)>,
}

impl<E> SequenceDefinition<E, HaltMap> {
    /// Create a builder for executor type `E`.
    pub fn builder() -> SequenceBuilder<E, HaltMap> {
        SequenceBuilder::new()
    }
}

impl<E, O> SequenceDefinition<E, O> {
    /// Get the owner type name used in diagnostics.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the steps in execution order.
    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    /// Get the number of registered steps, duplicates included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps are registered.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check if a halt handler was registered explicitly.
    pub fn has_custom_halt_handler(&self) -> bool {
        self.custom_handler
    }

    /// Invoke the halt handler.
    pub fn handle_halt(&self, step: Option<&StepId>, reason: &HaltReason) -> O {
        (self.handler)(step, reason)
    }
}

impl<E, O> fmt::Debug for SequenceDefinition<E, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceDefinition")
            .field("owner", &self.owner)
            .field("steps", &self.steps)
            .field("custom_handler", &self.custom_handler)
            .finish()
    }
}

/// Builder for constructing a [`SequenceDefinition`].
///
/// Starts with the default halt handler; [`on_halt`](Self::on_halt)
/// replaces it and fixes the handler's result type.
pub struct SequenceBuilder<E, O = HaltMap> {
    owner: String,
    steps: Vec<StepId>,
    handler: HaltHandler<O>,
    custom_handler: bool,
    _executor: PhantomData<fn(&mut E)>,
}

impl<E> SequenceBuilder<E, HaltMap> {
    /// Create a new builder with the default halt handler.
    pub fn new() -> Self {
        let owner = short_type_name::<E>();
        Self {
            handler: default_halt_handler(owner.clone()),
            owner,
            steps: Vec::new(),
            custom_handler: false,
            _executor: PhantomData,
        }
    }
}

impl<E> Default for SequenceBuilder<E, HaltMap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, O> SequenceBuilder<E, O> {
    /// Append a step. Duplicates are allowed and run again.
    pub fn add_step(mut self, step: impl Into<StepId>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append several steps in order.
    pub fn add_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StepId>,
    {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    /// Replace the halt handler.
    pub fn on_halt<P, F>(self, handler: F) -> SequenceBuilder<E, P>
    where
        F: Fn(Option<&StepId>, &HaltReason) -> P + Send + Sync + 'static,
    {
        SequenceBuilder {
            owner: self.owner,
            steps: self.steps,
            handler: Box::new(handler),
            custom_handler: true,
            _executor: PhantomData,
        }
    }

    /// Freeze the definition.
    pub fn build(self) -> SequenceDefinition<E, O> {
        SequenceDefinition {
            owner: self.owner,
            steps: self.steps,
            handler: self.handler,
            custom_handler: self.custom_handler,
            _executor: PhantomData,
        }
    }
}

fn default_halt_handler(owner: String) -> HaltHandler<HaltMap> {
    Box::new(move |step, reason| {
        warn!("No halt handler configured for {}", owner);
        let key = step.map_or_else(|| NO_STEP_KEY.to_string(), |s| s.to_string());
        let mut map = Map::new();
        map.insert(key, reason.to_value());
        map
    })
}

/// Last path segment of a type name, generics stripped.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Pipeline;

    mod nested {
        pub struct Generic<T>(pub T);
    }

    #[test]
    fn builder_preserves_insertion_order_and_duplicates() {
        let def = SequenceDefinition::<Pipeline>::builder()
            .add_step("a")
            .add_step("b")
            .add_step("a")
            .build();
        let names: Vec<&str> = def.steps().iter().map(StepId::as_str).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
        assert_eq!(def.len(), 3);
        assert!(!def.is_empty());
    }

    #[test]
    fn add_steps_appends_in_order() {
        let def = SequenceDefinition::<Pipeline>::builder()
            .add_step("first")
            .add_steps(["second", "third"])
            .build();
        let names: Vec<&str> = def.steps().iter().map(StepId::as_str).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn owner_is_short_type_name() {
        let def = SequenceDefinition::<Pipeline>::builder().build();
        assert_eq!(def.owner(), "Pipeline");
        assert_eq!(short_type_name::<nested::Generic<Vec<u8>>>(), "Generic");
    }

    #[test]
    fn default_handler_maps_step_to_reason() {
        let def = SequenceDefinition::<Pipeline>::builder()
            .add_step("some_step")
            .build();
        assert!(!def.has_custom_halt_handler());

        let step = StepId::new("some_step");
        let reason = HaltReason::Halted(json!({"random_key": "why"}));
        let out = def.handle_halt(Some(&step), &reason);
        assert_eq!(
            Value::Object(out),
            json!({"some_step": {"random_key": "why"}})
        );
    }

    #[test]
    fn default_handler_uses_placeholder_without_step() {
        let def = SequenceDefinition::<Pipeline>::builder().build();
        let out = def.handle_halt(None, &HaltReason::Halted(json!("early")));
        assert_eq!(out.get(NO_STEP_KEY), Some(&json!("early")));
    }

    #[test]
    fn on_halt_replaces_previous_handler() {
        let def = SequenceDefinition::<Pipeline>::builder()
            .on_halt(|_, _| 1)
            .on_halt(|step, reason| format!("{}: {}", step.unwrap(), reason))
            .build();
        assert!(def.has_custom_halt_handler());

        let step = StepId::new("checkLimit");
        let out = def.handle_halt(Some(&step), &HaltReason::Halted(json!("too large")));
        assert_eq!(out, "checkLimit: too large");
    }

    #[test]
    fn empty_definition() {
        let def = SequenceDefinition::<Pipeline>::builder().build();
        assert!(def.is_empty());
        assert_eq!(def.len(), 0);
    }
}
