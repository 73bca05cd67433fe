use crate::error::SawError;
use std::fmt;
use std::str::FromStr;

/// The six severity tags understood by the color table and the effect dispatch.
///
/// Levels are an unordered tag set, not a threshold: there is no `Ord` and no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Panic,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Exact, case-sensitive lookup of an open level string
    pub fn from_tag(tag: &str) -> Option<Level> {
        match tag {
            "DEBUG" => Some(Level::Debug),
            "INFO" => Some(Level::Info),
            "WARNING" => Some(Level::Warning),
            "ERROR" => Some(Level::Error),
            "FATAL" => Some(Level::Fatal),
            "PANIC" => Some(Level::Panic),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = SawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_tag(s).ok_or_else(|| SawError::UnknownLevel(s.to_string()))
    }
}
