// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory backing store fake for testing without a registry or filesystem.

use collapse_settings::backing::{BackingError, BackingStore, ValueKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`BackingStore`] for testing.
///
/// Clones share state, so a test can hand one clone to a
/// [`SettingsStore`](collapse_settings::SettingsStore) and inspect the other.
/// It also tracks call counts and can be switched into failure modes.
///
/// # Example
///
/// ```
/// use collapse_dry_tests::InMemoryBackingStore;
/// use collapse_settings::{ScreenSettings, SettingsStore, SettingsValue};
///
/// let backing = InMemoryBackingStore::new();
/// let store = SettingsStore::new(backing.clone());
///
/// store.save(&ScreenSettings::default());
/// assert_eq!(backing.set_count(), 1);
/// assert!(backing.contains_key(ScreenSettings::VALUE_NAME));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryBackingStore {
    inner: Arc<Mutex<InMemoryBackingStoreInner>>,
}

#[derive(Default)]
struct InMemoryBackingStoreInner {
    data: HashMap<String, (Vec<u8>, ValueKind)>,
    get_count: usize,
    set_count: usize,
    fail_on_get: bool,
    fail_on_set: bool,
}

impl InMemoryBackingStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with binary entries.
    pub fn with_data(data: HashMap<String, Vec<u8>>) -> Self {
        let data = data
            .into_iter()
            .map(|(name, bytes)| (name, (bytes, ValueKind::Binary)))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(InMemoryBackingStoreInner {
                data,
                ..Default::default()
            })),
        }
    }

    /// Create a store holding a single binary entry.
    pub fn with_entry(name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.insert_raw(name, bytes);
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryBackingStoreInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Overwrite an entry directly, bypassing counters and failure switches.
    pub fn insert_raw(&self, name: &str, bytes: impl Into<Vec<u8>>) {
        self.lock()
            .data
            .insert(name.to_string(), (bytes.into(), ValueKind::Binary));
    }

    /// Read an entry directly, bypassing counters and failure switches.
    pub fn raw(&self, name: &str) -> Option<Vec<u8>> {
        self.lock().data.get(name).map(|(bytes, _)| bytes.clone())
    }

    /// Kind tag the entry was last written with.
    pub fn kind(&self, name: &str) -> Option<ValueKind> {
        self.lock().data.get(name).map(|(_, kind)| *kind)
    }

    /// Configure the store to fail on `get`.
    pub fn set_fail_on_get(&self, fail: bool) {
        self.lock().fail_on_get = fail;
    }

    /// Configure the store to fail on `set`.
    pub fn set_fail_on_set(&self, fail: bool) {
        self.lock().fail_on_set = fail;
    }

    /// Number of `get` calls attempted, including failed ones.
    pub fn get_count(&self) -> usize {
        self.lock().get_count
    }

    /// Number of `set` calls attempted, including failed ones.
    pub fn set_count(&self) -> usize {
        self.lock().set_count
    }

    /// All entry names currently present.
    pub fn keys(&self) -> Vec<String> {
        self.lock().data.keys().cloned().collect()
    }

    /// Check if an entry exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.lock().data.contains_key(name)
    }

    /// Reset to an empty store with zeroed counters and failure switches off.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.data.clear();
        inner.get_count = 0;
        inner.set_count = 0;
        inner.fail_on_get = false;
        inner.fail_on_set = false;
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>, BackingError> {
        let mut inner = self.lock();
        inner.get_count += 1;

        if inner.fail_on_get {
            return Err(BackingError::Rejected("simulated get failure".into()));
        }

        Ok(inner.data.get(name).map(|(bytes, _)| bytes.clone()))
    }

    fn set(&self, name: &str, value: &[u8], kind: ValueKind) -> Result<(), BackingError> {
        let mut inner = self.lock();
        inner.set_count += 1;

        if inner.fail_on_set {
            return Err(BackingError::Rejected("simulated set failure".into()));
        }

        inner.data.insert(name.to_string(), (value.to_vec(), kind));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_set_get() {
        let store = InMemoryBackingStore::new();
        store.set("test", b"hello", ValueKind::Binary).unwrap();
        assert_eq!(store.get("test").unwrap().as_deref(), Some(&b"hello"[..]));
        assert_eq!(store.kind("test"), Some(ValueKind::Binary));
        assert_eq!(store.set_count(), 1);
        assert_eq!(store.get_count(), 1);
    }

    #[test]
    fn get_missing_entry_returns_none() {
        let store = InMemoryBackingStore::new();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn failure_switches_return_errors_and_still_count() {
        let store = InMemoryBackingStore::with_entry("test", b"data".to_vec());
        store.set_fail_on_get(true);
        store.set_fail_on_set(true);

        assert!(matches!(store.get("test"), Err(BackingError::Rejected(_))));
        assert!(matches!(
            store.set("other", b"x", ValueKind::Binary),
            Err(BackingError::Rejected(_))
        ));
        assert!(!store.contains_key("other"));
        assert_eq!(store.get_count(), 1);
        assert_eq!(store.set_count(), 1);
    }

    #[test]
    fn failure_switches_can_be_toggled() {
        let store = InMemoryBackingStore::new();
        store.set_fail_on_set(true);
        assert!(store.set("a", b"1", ValueKind::Binary).is_err());
        store.set_fail_on_set(false);
        store.set("b", b"2", ValueKind::Binary).unwrap();

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["b"]);
    }

    #[test]
    fn with_data_prepopulates_without_counting() {
        let mut initial = HashMap::new();
        initial.insert("key1".to_string(), b"value1".to_vec());
        initial.insert("key2".to_string(), b"value2".to_vec());
        let store = InMemoryBackingStore::with_data(initial);

        assert_eq!(store.raw("key1").as_deref(), Some(&b"value1"[..]));
        assert_eq!(store.get("key2").unwrap().as_deref(), Some(&b"value2"[..]));
        assert_eq!(store.get_count(), 1);
        assert_eq!(store.set_count(), 0);
    }

    #[test]
    fn clone_shares_state() {
        let a = InMemoryBackingStore::new();
        let b = a.clone();

        a.set("shared", b"v", ValueKind::Binary).unwrap();
        assert_eq!(b.raw("shared").as_deref(), Some(&b"v"[..]));
        assert_eq!(b.set_count(), 1);

        b.set_fail_on_get(true);
        assert!(a.get("shared").is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let store = InMemoryBackingStore::new();
        store.set("key", b"value", ValueKind::Binary).unwrap();
        let _ = store.get("key");
        store.set_fail_on_get(true);
        store.set_fail_on_set(true);

        store.reset();

        assert!(store.keys().is_empty());
        assert_eq!(store.get_count(), 0);
        assert_eq!(store.set_count(), 0);
        store.set("key", b"value", ValueKind::Binary).unwrap();
        assert!(store.get("key").is_ok());
    }
}
