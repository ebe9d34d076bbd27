//! Structured JSON logger
//!
//! - One log line = one event
//! - `event`, `severity` and `timestamp` first, remaining fields sorted by key
//! - INFO goes to stdout, ERROR/FATAL to stderr

use std::fmt;
use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 1,
    /// Operation failures
    Error = 2,
    /// Unrecoverable, process exits
    Fatal = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn to_stderr(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that writes one JSON object per line
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity.to_stderr() {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::format_line(severity, event, fields);

        // Single write per event so concurrent requests never interleave
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        let mut entry = Map::with_capacity(fields.len() + 3);
        entry.insert("event".to_string(), Value::from(event));
        entry.insert("severity".to_string(), Value::from(severity.as_str()));
        entry.insert(
            "timestamp".to_string(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        for (key, value) in sorted_fields {
            if entry.contains_key(*key) {
                continue;
            }
            entry.insert((*key).to_string(), Value::from(*value));
        }

        let mut output = Value::Object(entry).to_string();
        output.push('\n');
        output
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

/// Parse a captured log line back into its fields
#[cfg(test)]
fn capture_log(
    severity: Severity,
    event: &str,
    fields: &[(&str, &str)],
) -> Map<String, Value> {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    let line = String::from_utf8(buffer).unwrap();
    assert!(line.ends_with('\n'));
    serde_json::from_str(&line).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(!Severity::Info.to_stderr());
        assert!(Severity::Error.to_stderr());
    }

    #[test]
    fn test_log_json_format() {
        let parsed = capture_log(Severity::Info, "SERVER_LISTENING", &[("port", "3000")]);

        assert_eq!(parsed["event"], "SERVER_LISTENING");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["port"], "3000");
        assert!(parsed["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_fields_sorted_after_header() {
        let mut buffer = Vec::new();
        Logger::log_to_writer(
            Severity::Info,
            "E",
            &[("zeta", "1"), ("alpha", "2")],
            &mut buffer,
        );
        let line = String::from_utf8(buffer).unwrap();

        let event = line.find("\"event\"").unwrap();
        let alpha = line.find("\"alpha\"").unwrap();
        let zeta = line.find("\"zeta\"").unwrap();
        assert!(event < alpha && alpha < zeta);
    }

    #[test]
    fn test_values_are_escaped() {
        let parsed = capture_log(
            Severity::Error,
            "QUERY_FAILED",
            &[("error", "near \"DROP\": syntax error\n")],
        );
        assert_eq!(parsed["error"], "near \"DROP\": syntax error\n");
    }

    #[test]
    fn test_reserved_keys_not_duplicated() {
        let parsed = capture_log(Severity::Info, "E", &[("severity", "spoofed")]);
        assert_eq!(parsed["severity"], "INFO");
    }
}
