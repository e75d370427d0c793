// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Diagnostics port for settings load/save.
//!
//! Every load and save emits one line here. Hosts inject their own port to
//! capture or redirect it; [`TracingLogPort`] forwards to `tracing`.

/// Severity of a diagnostics line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Payload dumps and empty-state notes.
    Debug,
    /// Recovered failures.
    Error,
}

/// Sink for settings diagnostics. Implementations must not fail.
pub trait LogPort {
    /// Record one line about the entry named `value_name`.
    fn log(&self, level: LogLevel, value_name: &str, message: &str);
}

/// Forwards diagnostics to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogPort;

impl LogPort for TracingLogPort {
    fn log(&self, level: LogLevel, value_name: &str, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(value = value_name, "{message}"),
            LogLevel::Error => tracing::error!(value = value_name, "{message}"),
        }
    }
}

impl<P: LogPort + ?Sized> LogPort for Box<P> {
    fn log(&self, level: LogLevel, value_name: &str, message: &str) {
        (**self).log(level, value_name, message);
    }
}
