// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording log port for asserting on settings diagnostics.

use collapse_settings::log_port::{LogLevel, LogPort};
use std::sync::{Arc, Mutex};

/// One captured diagnostics line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity.
    pub level: LogLevel,
    /// Value name the line refers to.
    pub value_name: String,
    /// Rendered message.
    pub message: String,
}

/// [`LogPort`] that keeps every line in memory. Clones share the buffer.
#[derive(Clone, Default)]
pub struct RecordingLogPort {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogPort {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Captured lines at `level`.
    pub fn at(&self, level: LogLevel) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .collect()
    }

    /// Captured error lines.
    pub fn errors(&self) -> Vec<LogRecord> {
        self.at(LogLevel::Error)
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl LogPort for RecordingLogPort {
    fn log(&self, level: LogLevel, value_name: &str, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LogRecord {
                level,
                value_name: value_name.to_string(),
                message: message.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_shared_between_clones() {
        let a = RecordingLogPort::new();
        let b = a.clone();
        a.log(LogLevel::Debug, "v", "hello");
        b.log(LogLevel::Error, "v", "boom");

        assert_eq!(a.records().len(), 2);
        assert_eq!(b.errors().len(), 1);
        assert_eq!(b.errors()[0].message, "boom");

        b.clear();
        assert!(a.records().is_empty());
    }
}
