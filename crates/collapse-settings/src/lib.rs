// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persistence for Collapse launcher screen settings.
//! Records are framed JSON blobs in an injected key-value store; loads fall
//! back to defaults and saves never fail the caller.

pub mod backing;
pub mod error;
pub mod framing;
pub mod log_port;
pub mod screen;
pub mod store;
pub mod value;

pub use backing::{BackingError, BackingStore, ValueKind};
pub use error::SettingsError;
pub use framing::FramingViolation;
pub use log_port::{LogLevel, LogPort, TracingLogPort};
pub use screen::{GraphicsApi, ScreenSettings, UnknownGraphicsApi};
pub use store::{SettingsStore, StoreOptions};
pub use value::SettingsValue;
