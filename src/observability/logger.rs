//! Structured JSON logger.
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then fields alphabetically)
//! - Synchronous, unbuffered writes
//! - ERROR goes to stderr, everything else to stdout

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        match severity {
            Severity::Error => Self::write_line(severity, event, fields, &mut io::stderr()),
            _ => Self::write_line(severity, event, fields, &mut io::stdout()),
        }
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    // JSON is built by hand so that key order stays deterministic: event
    // first, then severity, then fields sorted by key.
    fn write_line<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write, one flush per event
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Escape special characters for a JSON string value
fn escape_into(output: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

#[cfg(test)]
fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::write_line(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_and_display() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_log_is_valid_json() {
        let output = capture_log(
            Severity::Info,
            "server_listening",
            &[("addr", "0.0.0.0:8080")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "server_listening");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["addr"], "0.0.0.0:8080");
    }

    #[test]
    fn test_log_field_order_is_deterministic() {
        let a = capture_log(Severity::Info, "e", &[("zeta", "1"), ("alpha", "2")]);
        let b = capture_log(Severity::Info, "e", &[("alpha", "2"), ("zeta", "1")]);
        assert_eq!(a, b);
        assert!(a.find("alpha").unwrap() < a.find("zeta").unwrap());
    }

    #[test]
    fn test_log_event_comes_first() {
        let output = capture_log(Severity::Warn, "an_event", &[("aaa", "sorted after event")]);
        assert!(output.find("\"event\"").unwrap() < output.find("\"aaa\"").unwrap());
    }

    #[test]
    fn test_log_is_one_line() {
        let output = capture_log(Severity::Info, "e", &[("a", "1"), ("b", "2")]);
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_log_escapes_special_characters() {
        let output = capture_log(Severity::Error, "e", &[("msg", "a \"quoted\"\nline")]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["msg"], "a \"quoted\"\nline");
    }
}
