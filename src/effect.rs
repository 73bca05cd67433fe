//! Level-driven process effects of the console path.
//!
//! Rendering decides *what* should happen (`Effect`); an `EffectHandler` decides *how*.
//! `ProcessEffects` writes to stdout, exits, or panics for real. `RecordingEffects`
//! only remembers what it was asked to do.

use crate::level::Level;
use std::io::{self, Write};
use std::sync::Mutex;

/// Exit status used for FATAL records
pub const FATAL_EXIT_STATUS: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the block and return normally
    Continue,
    /// Write the block, then exit with this status
    TerminateProcess(i32),
    /// Unwind with this payload instead of writing
    RaiseUnrecoverable(String),
}

impl Effect {
    pub fn for_level(level: &str, rendered: &str) -> Self {
        match Level::from_tag(level) {
            Some(Level::Panic) => Effect::RaiseUnrecoverable(rendered.to_string()),
            Some(Level::Fatal) => Effect::TerminateProcess(FATAL_EXIT_STATUS),
            _ => Effect::Continue,
        }
    }
}

/// A rendered console block together with the effect it asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub effect: Effect,
}

pub trait EffectHandler: Send + Sync {
    fn apply(&self, rendered: Rendered);
}

/// Performs the real effects against the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEffects;

impl ProcessEffects {
    fn write_stdout(text: &str) {
        // Write failures on stdout are not reported
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

impl EffectHandler for ProcessEffects {
    fn apply(&self, rendered: Rendered) {
        match rendered.effect {
            Effect::Continue => Self::write_stdout(&rendered.text),
            Effect::TerminateProcess(status) => {
                Self::write_stdout(&rendered.text);
                std::process::exit(status);
            }
            Effect::RaiseUnrecoverable(payload) => std::panic::panic_any(payload),
        }
    }
}

/// Collects every rendered block instead of acting on it
#[derive(Debug, Default)]
pub struct RecordingEffects {
    seen: Mutex<Vec<Rendered>>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Rendered> {
        let mut seen = self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *seen)
    }

    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EffectHandler for RecordingEffects {
    fn apply(&self, rendered: Rendered) {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(rendered);
    }
}
