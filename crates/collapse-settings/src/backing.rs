// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Backing key-value port for settings blobs.

use thiserror::Error;

/// Kind tag attached to a stored value.
///
/// Settings blobs are always written as [`ValueKind::Binary`]; the tag exists
/// so adapters over typed stores (registry-like backends) know how to persist
/// the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    /// Opaque byte blob.
    Binary,
}

/// Storage port for raw settings blobs (keyed by logical value name).
pub trait BackingStore {
    /// Read the blob stored under `name`. Returns `Ok(None)` when the entry is absent.
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>, BackingError>;
    /// Replace the blob stored under `name` in full.
    fn set(&self, name: &str, value: &[u8], kind: ValueKind) -> Result<(), BackingError>;
}

impl<B: BackingStore + ?Sized> BackingStore for &B {
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>, BackingError> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &[u8], kind: ValueKind) -> Result<(), BackingError> {
        (**self).set(name, value, kind)
    }
}

impl<B: BackingStore + ?Sized> BackingStore for Box<B> {
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>, BackingError> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &[u8], kind: ValueKind) -> Result<(), BackingError> {
        (**self).set(name, value, kind)
    }
}

/// Error type for backing store operations.
#[derive(Debug, Error)]
pub enum BackingError {
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Entry name the backend cannot address.
    #[error("invalid value name: {0:?}")]
    InvalidName(String),
    /// Backend refused the operation.
    #[error("rejected: {0}")]
    Rejected(String),
}
