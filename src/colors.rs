use crate::level::Level;

/// ANSI color codes for console log blocks
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub debug: &'static str,   // Cyan
    pub info: &'static str,    // Green
    pub warning: &'static str, // Yellow
    pub error: &'static str,   // Red
    pub fatal: &'static str,   // Magenta
    pub panic: &'static str,   // Red background
    pub reset: &'static str,   // Reset to default color
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                debug: "\x1b[0;36m",
                info: "\x1b[0;32m",
                warning: "\x1b[0;33m",
                error: "\x1b[0;31m",
                fatal: "\x1b[0;35m",
                panic: "\x1b[0;41m",
                reset: "\x1b[0m",
            }
        } else {
            // All empty strings for no-color mode
            Self {
                debug: "",
                info: "",
                warning: "",
                error: "",
                fatal: "",
                panic: "",
                reset: "",
            }
        }
    }

    /// Color for an open level string; unknown tags get the reset code
    pub fn level_color(&self, level: &str) -> &'static str {
        match Level::from_tag(level) {
            Some(Level::Debug) => self.debug,
            Some(Level::Info) => self.info,
            Some(Level::Warning) => self.warning,
            Some(Level::Error) => self.error,
            Some(Level::Fatal) => self.fatal,
            Some(Level::Panic) => self.panic,
            None => self.reset,
        }
    }
}
