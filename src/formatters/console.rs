use crate::colors::ColorScheme;
use crate::formatters::RecordFormatter;
use crate::pool;
use crate::record::LogRecord;
use std::fmt::Write;

const SEPARATOR: &str = "----------------------------------------------------------------";

/// Five-line bordered text block, optionally wrapped in ANSI colors per line
pub struct ConsoleFormatter {
    colors: ColorScheme,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self {
            colors: ColorScheme::new(use_colors),
        }
    }

    fn write_block(&self, out: &mut String, record: &LogRecord) -> std::fmt::Result {
        let color = self.colors.level_color(&record.level);
        let reset = self.colors.reset;

        writeln!(out, "{}{}{}", color, SEPARATOR, reset)?;
        writeln!(out, "{}Log level: {}{}", color, record.level, reset)?;
        writeln!(out, "{}Log message: {}{}", color, record.message, reset)?;
        writeln!(out, "{}Log time: {}{}", color, record.local_time(), reset)?;
        writeln!(out, "{}{}{}", color, SEPARATOR, reset)
    }
}

impl RecordFormatter for ConsoleFormatter {
    fn format_record(&self, record: &LogRecord) -> String {
        let mut buf = pool::acquire();
        // Writing into a String cannot fail
        let _ = self.write_block(&mut buf, record);
        buf.as_str().to_owned()
    }
}
