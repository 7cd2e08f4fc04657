//! Integration tests for the diagnostics emitted through `tracing`.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::json;
use step_sequencer::runner::{SequenceRunner, StepExecutor};
use step_sequencer::sequence::{HaltState, SequenceDefinition, StepFn, StepId, NO_STEP_KEY};
use step_sequencer::StepResult;
use tracing_subscriber::fmt::MakeWriter;

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Default)]
struct Quiet {
    halt: HaltState,
}

impl Quiet {
    fn stop(&mut self) -> StepResult<()> {
        self.halt("stopping");
        Ok(())
    }

    fn fail(&mut self) -> StepResult<()> {
        anyhow::bail!("exploded")
    }
}

impl StepExecutor for Quiet {
    type Acc = ();

    fn resolve(&self, step: &StepId) -> Option<StepFn<Self, ()>> {
        match step.as_str() {
            "stop" => Some(StepFn::Nullary(Self::stop)),
            "fail" => Some(StepFn::Nullary(Self::fail)),
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

fn capture_warnings(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn default_handler_warns_with_owner_name() {
    let def = SequenceDefinition::<Quiet>::builder()
        .add_step("stop")
        .build();

    let logs = capture_warnings(|| {
        let out = SequenceRunner::new(&def)
            .run(&mut Quiet::default(), ())
            .unwrap()
            .halted()
            .unwrap();
        assert_eq!(out.get("stop"), Some(&json!("stopping")));
    });

    assert!(logs.contains("No halt handler configured for Quiet"));
}

#[test]
fn default_handler_warns_when_first_step_fails() {
    let def = SequenceDefinition::<Quiet>::builder()
        .add_step("fail")
        .add_step("stop")
        .build();

    let logs = capture_warnings(|| {
        let out = SequenceRunner::new(&def)
            .run(&mut Quiet::default(), ())
            .unwrap()
            .halted()
            .unwrap();
        assert_eq!(out.get(NO_STEP_KEY), Some(&json!("exploded")));
    });

    assert!(logs.contains("No halt handler configured for Quiet"));
}

#[test]
fn custom_handler_emits_no_default_warning() {
    let def = SequenceDefinition::<Quiet>::builder()
        .add_step("stop")
        .on_halt(|_, reason| reason.to_string())
        .build();

    let logs = capture_warnings(|| {
        SequenceRunner::new(&def)
            .run(&mut Quiet::default(), ())
            .unwrap();
    });

    assert!(!logs.contains("No halt handler configured"));
}

#[test]
fn step_error_is_logged() {
    let def = SequenceDefinition::<Quiet>::builder()
        .add_step("fail")
        .on_halt(|_, reason| reason.to_string())
        .build();

    let logs = capture_warnings(|| {
        SequenceRunner::new(&def)
            .run(&mut Quiet::default(), ())
            .unwrap();
    });

    assert!(logs.contains("Step 'fail' errored: exploded"));
}
