// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fail-safe settings store over a [`BackingStore`].
//!
//! Two layers:
//! - `try_load` / `try_save` return typed [`SettingsError`]s;
//! - `load` / `save` wrap them, report failures to the [`LogPort`] and never
//!   fail. `load` falls back to the record's `Default`.
//!
//! The store keeps no cached record: every load re-reads the backing entry and
//! every save overwrites it in full.

use crate::backing::{BackingStore, ValueKind};
use crate::error::SettingsError;
use crate::framing;
use crate::log_port::{LogLevel, LogPort, TracingLogPort};
use crate::value::SettingsValue;

/// Runtime options for a [`SettingsStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Emit debug lines (payload dumps, absent-entry notes) to the log port.
    /// Errors are reported regardless.
    pub dump_payloads: bool,
}

impl Default for StoreOptions {
    /// Payload dumps follow the build profile (on for debug builds).
    fn default() -> Self {
        Self {
            dump_payloads: cfg!(debug_assertions),
        }
    }
}

/// Loads and saves [`SettingsValue`] records against an optional backing root.
///
/// `root == None` models a host that never initialized its backing store;
/// every operation then fails with [`SettingsError::BackingUnavailable`].
pub struct SettingsStore<B> {
    root: Option<B>,
    log: Box<dyn LogPort>,
    options: StoreOptions,
}

impl<B> SettingsStore<B> {
    /// Create a store over an initialized backing root.
    pub fn new(root: B) -> Self {
        Self::with_root(Some(root))
    }

    /// Create a store over a root that may not be initialized.
    pub fn with_root(root: Option<B>) -> Self {
        Self {
            root,
            log: Box::new(TracingLogPort),
            options: StoreOptions::default(),
        }
    }

    /// Create a store whose backing root is missing.
    pub fn unavailable() -> Self {
        Self::with_root(None)
    }

    /// Replace the diagnostics port (defaults to [`TracingLogPort`]).
    pub fn with_log_port<P>(mut self, port: P) -> Self
    where
        P: LogPort + 'static,
    {
        self.log = Box::new(port);
        self
    }

    /// Replace the runtime options.
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Current runtime options.
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Borrow the backing root, if initialized.
    pub fn root(&self) -> Option<&B> {
        self.root.as_ref()
    }

    /// Consume the store and return the backing root.
    pub fn into_inner(self) -> Option<B> {
        self.root
    }
}

impl<B> SettingsStore<B>
where
    B: BackingStore,
{
    /// Load `T`, falling back to `T::default()` on any failure.
    ///
    /// Absent entries are the first-run path and are not reported as errors.
    pub fn load<T: SettingsValue>(&self) -> T {
        match self.try_load::<T>() {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                self.log.log(
                    LogLevel::Error,
                    T::VALUE_NAME,
                    &format!("Failed while reading {}: {err}", T::VALUE_NAME),
                );
                T::default()
            }
        }
    }

    /// Persist `value`, replacing any stored blob. Failures are logged and swallowed.
    pub fn save<T: SettingsValue>(&self, value: &T) {
        if let Err(err) = self.try_save(value) {
            self.log.log(
                LogLevel::Error,
                T::VALUE_NAME,
                &format!("Failed to save {}: {err}", T::VALUE_NAME),
            );
        }
    }

    /// Load `T`, returning `Ok(None)` when the entry is absent.
    pub fn try_load<T: SettingsValue>(&self) -> Result<Option<T>, SettingsError> {
        let root = self.backing(T::VALUE_NAME)?;
        let Some(blob) = root.get(T::VALUE_NAME).map_err(SettingsError::Read)? else {
            self.debug(T::VALUE_NAME, || {
                format!("No stored {}; using defaults", T::VALUE_NAME)
            });
            return Ok(None);
        };

        let payload = framing::payload(&blob)?;
        self.debug(T::VALUE_NAME, || {
            format!(
                "Loaded {}:\n{}",
                T::VALUE_NAME,
                String::from_utf8_lossy(payload)
            )
        });
        framing::decode_payload(payload).map(Some)
    }

    /// Encode and write `value` as a binary blob.
    pub fn try_save<T: SettingsValue>(&self, value: &T) -> Result<(), SettingsError> {
        let root = self.backing(T::VALUE_NAME)?;
        let blob = framing::encode(value)?;
        self.debug(T::VALUE_NAME, || {
            format!(
                "Saved {}:\n{}",
                T::VALUE_NAME,
                String::from_utf8_lossy(&blob[..blob.len() - 1])
            )
        });
        root.set(T::VALUE_NAME, &blob, ValueKind::Binary)
            .map_err(SettingsError::Write)
    }

    fn backing(&self, name: &'static str) -> Result<&B, SettingsError> {
        self.root
            .as_ref()
            .ok_or(SettingsError::BackingUnavailable { name })
    }

    fn debug(&self, name: &str, message: impl FnOnce() -> String) {
        if self.options.dump_payloads {
            self.log.log(LogLevel::Debug, name, &message());
        }
    }
}
