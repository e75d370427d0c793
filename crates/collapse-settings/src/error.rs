// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for settings load/save.
//!
//! Only the typed `try_*` operations surface these; [`SettingsStore::load`]
//! and [`SettingsStore::save`] report them to the log port and recover.
//!
//! [`SettingsStore::load`]: crate::store::SettingsStore::load
//! [`SettingsStore::save`]: crate::store::SettingsStore::save

use thiserror::Error;

use crate::backing::BackingError;
use crate::framing::FramingViolation;

/// Failure while moving a record between memory and its backing entry.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The backing root was never initialized by the host.
    #[error("backing store is not initialized (value {name})")]
    BackingUnavailable {
        /// Value name the operation targeted.
        name: &'static str,
    },
    /// Stored blob is not `payload ++ 0x00`.
    #[error("framing violation: {0}")]
    Framing(#[from] FramingViolation),
    /// Payload is well-framed but not a valid record.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
    /// Record could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
    /// Backing store failed to read the entry.
    #[error("read failed: {0}")]
    Read(#[source] BackingError),
    /// Backing store rejected the write.
    #[error("write failed: {0}")]
    Write(#[source] BackingError),
}
