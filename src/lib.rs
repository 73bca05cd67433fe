// src/lib.rs
pub mod colors;
pub mod config;
pub mod effect;
pub mod error;
pub mod formatters;
pub mod level;
pub mod pool;
pub mod record;
pub mod saw;
pub mod tty;

pub use error::*;

pub use config::SawConfig;
pub use effect::{Effect, EffectHandler, ProcessEffects, RecordingEffects, Rendered};
pub use formatters::{ConsoleFormatter, JsonFormatter, RecordFormatter};
pub use level::Level;
pub use record::LogRecord;
pub use saw::{JsonLog, Saw};
