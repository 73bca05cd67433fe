use crate::error::SawError;
use crate::formatters::RecordFormatter;
use crate::record::LogRecord;

/// Compact JSON rendering of a record. Performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        JsonFormatter
    }

    pub fn try_encode(&self, record: &LogRecord) -> Result<Vec<u8>, SawError> {
        Ok(serde_json::to_vec(record)?)
    }

    /// Encode a record, falling back to `{"error":"..."}` if serialization fails
    pub fn encode(&self, record: &LogRecord) -> Vec<u8> {
        self.try_encode(record)
            .unwrap_or_else(|err| error_payload(&err.to_string()))
    }
}

/// `{"error": message}` with the message properly escaped
pub fn error_payload(message: &str) -> Vec<u8> {
    serde_json::json!({ "error": message }).to_string().into_bytes()
}

impl RecordFormatter for JsonFormatter {
    fn format_record(&self, record: &LogRecord) -> String {
        String::from_utf8_lossy(&self.encode(record)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_compact_output_without_newline() {
        let formatter = JsonFormatter::new();
        let bytes = formatter.encode(&LogRecord::at("WARNING", "low disk", 42));

        assert_eq!(bytes, br#"{"Lvl":"WARNING","Msg":"low disk","Time":42}"#.to_vec());
        assert_ne!(bytes.last(), Some(&b'\n'));
    }

    #[test]
    fn test_html_characters_left_unescaped() {
        let formatter = JsonFormatter::new();
        let text = formatter.format_record(&LogRecord::at("INFO", "<b>&</b>", 1));

        assert!(text.contains("<b>&</b>"));
        assert!(!text.contains("\\u003c"));
        assert!(!text.contains("&amp;"));
    }

    #[test]
    fn test_error_payload_shape() {
        let payload = error_payload("bad \"thing\"");
        let value: Value = serde_json::from_slice(&payload).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["error"], "bad \"thing\"");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let formatter = JsonFormatter::new();
        let bytes = formatter.encode(&LogRecord::at("INFO", "line1\nline2\t\"q\"", 7));
        let decoded: LogRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.message, "line1\nline2\t\"q\"");
    }
}
