use crate::config::SawConfig;
use crate::effect::{Effect, EffectHandler, ProcessEffects, Rendered};
use crate::formatters::{ConsoleFormatter, JsonFormatter, RecordFormatter};
use crate::level::Level;
use crate::record::LogRecord;
use std::fmt;
use std::sync::Arc;

/// Leveled logger with a console path and a JSON path.
///
/// The console path writes a bordered block to stdout. FATAL exits the process
/// with status 1 and PANIC unwinds with the block as a `String` payload. The JSON
/// path returns bytes for every level and never performs I/O or process effects.
#[derive(Clone)]
pub struct Saw {
    config: SawConfig,
    json: JsonLog,
    effects: Arc<dyn EffectHandler>,
}

/// JSON sub-logger reachable through [`Saw::json`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLog {
    formatter: JsonFormatter,
}

impl Saw {
    pub fn new() -> Self {
        Saw {
            config: SawConfig::default(),
            json: JsonLog::default(),
            effects: Arc::new(ProcessEffects),
        }
    }

    /// Replace the whole configuration
    pub fn set_config(mut self, config: SawConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the handler that carries out console effects
    pub fn with_effects(mut self, effects: Arc<dyn EffectHandler>) -> Self {
        self.effects = effects;
        self
    }

    pub fn config(&self) -> &SawConfig {
        &self.config
    }

    pub fn json(&self) -> &JsonLog {
        &self.json
    }

    /// Render a console block for any level string without side effects
    pub fn render(&self, level: &str, msg: &str) -> Rendered {
        let record = LogRecord::now(level, msg);
        self.render_record(&record)
    }

    pub fn render_record(&self, record: &LogRecord) -> Rendered {
        let text = ConsoleFormatter::new(self.config.colors).format_record(record);
        let effect = Effect::for_level(&record.level, &text);
        Rendered { text, effect }
    }

    /// Log at an arbitrary level string; unknown levels are rendered uncolored
    pub fn log(&self, level: &str, msg: &str) {
        let rendered = self.render(level, msg);
        self.effects.apply(rendered);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug.as_str(), msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info.as_str(), msg);
    }

    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning.as_str(), msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error.as_str(), msg);
    }

    /// Print the block and exit with status 1
    pub fn fatal(&self, msg: &str) {
        self.log(Level::Fatal.as_str(), msg);
    }

    /// Unwind with the rendered block as payload
    pub fn panic(&self, msg: &str) {
        self.log(Level::Panic.as_str(), msg);
    }
}

impl Default for Saw {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Saw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Saw")
            .field("config", &self.config)
            .field("json", &self.json)
            .finish_non_exhaustive()
    }
}

impl JsonLog {
    /// Encode a record at an arbitrary level string
    pub fn log(&self, level: &str, msg: &str) -> Vec<u8> {
        self.formatter.encode(&LogRecord::now(level, msg))
    }

    pub fn debug(&self, msg: &str) -> Vec<u8> {
        self.log(Level::Debug.as_str(), msg)
    }

    pub fn info(&self, msg: &str) -> Vec<u8> {
        self.log(Level::Info.as_str(), msg)
    }

    pub fn warning(&self, msg: &str) -> Vec<u8> {
        self.log(Level::Warning.as_str(), msg)
    }

    pub fn error(&self, msg: &str) -> Vec<u8> {
        self.log(Level::Error.as_str(), msg)
    }

    /// Returns bytes only; does not exit
    pub fn fatal(&self, msg: &str) -> Vec<u8> {
        self.log(Level::Fatal.as_str(), msg)
    }

    /// Returns bytes only; does not panic
    pub fn panic(&self, msg: &str) -> Vec<u8> {
        self.log(Level::Panic.as_str(), msg)
    }
}
