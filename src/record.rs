use crate::level::Level;
use chrono::{Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single log event. The level is kept as an open string so unknown tags pass through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "Lvl")]
    pub level: String,
    #[serde(rename = "Msg")]
    pub message: String,
    /// Seconds since the Unix epoch
    #[serde(rename = "Time")]
    pub time: i64,
}

impl LogRecord {
    /// Build a record stamped with the current wall-clock time
    pub fn now(level: &str, message: &str) -> Self {
        Self::at(level, message, Utc::now().timestamp())
    }

    pub fn at(level: &str, message: &str, time: i64) -> Self {
        LogRecord {
            level: level.to_string(),
            message: message.to_string(),
            time,
        }
    }

    pub fn known_level(&self) -> Option<Level> {
        Level::from_tag(&self.level)
    }

    /// Local wall-clock time of the record as `HH:MM:SS`
    pub fn local_time(&self) -> String {
        match Local.timestamp_opt(self.time, 0).earliest() {
            Some(dt) => dt.format("%H:%M:%S").to_string(),
            // Out of chrono's range; fall back to the raw UTC time-of-day
            None => {
                let secs = self.time.rem_euclid(86_400);
                format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
            }
        }
    }
}
