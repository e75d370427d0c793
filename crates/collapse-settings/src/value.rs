// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Contract shared by every record persisted through a [`SettingsStore`].

use serde::{de::DeserializeOwned, Serialize};

use crate::backing::BackingStore;
use crate::store::SettingsStore;

/// A settings record stored as one framed JSON blob under a fixed value name.
///
/// `Default` is the fallback returned whenever the stored blob is absent or
/// unreadable; a record is either decoded whole or replaced whole.
pub trait SettingsValue: Serialize + DeserializeOwned + Default {
    /// Name of the backing entry holding this record.
    const VALUE_NAME: &'static str;

    /// Load the record from `store`, falling back to `Default` on any failure.
    fn load_from<B: BackingStore>(store: &SettingsStore<B>) -> Self {
        store.load()
    }

    /// Persist the record to `store` (best-effort; failures are logged).
    fn save_to<B: BackingStore>(&self, store: &SettingsStore<B>) {
        store.save(self);
    }
}
