use crate::record::LogRecord;

/// Trait for formatting records to strings
pub trait RecordFormatter {
    fn format_record(&self, record: &LogRecord) -> String;
}

pub mod console;
pub mod json;

pub use console::ConsoleFormatter;
pub use json::JsonFormatter;
