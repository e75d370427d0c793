// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Collapse settings crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`backing`] - In-memory backing store fake with failure switches
//! - [`fixtures`] - Wire payloads and record combinations
//! - [`log`] - Recording log port for asserting on diagnostics

pub mod backing;
pub mod fixtures;
pub mod log;

pub use backing::InMemoryBackingStore;
pub use fixtures::{all_screen_settings, frame, DEFAULT_SCREEN_PAYLOAD, NON_DEFAULT_SCREEN};
pub use log::{LogRecord, RecordingLogPort};
