// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `BackingStore` for Collapse settings (uses platform config dir).

use collapse_settings::backing::{BackingError, BackingStore, ValueKind};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ENTRY_EXT: &str = "bin";
const TEMP_EXT: &str = "bin.tmp";

/// Store each value as `<name>.bin` under a root directory.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader sees either the previous blob or the new one.
#[derive(Debug, Clone)]
pub struct FsBackingStore {
    base: PathBuf,
}

impl FsBackingStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/Collapse`).
    pub fn new() -> Result<Self, BackingError> {
        let proj = ProjectDirs::from("com", "CollapseLauncher", "Collapse")
            .ok_or_else(|| BackingError::Rejected("could not resolve config dir".into()))?;
        Self::at(proj.config_dir())
    }

    /// Create a store rooted at `base`, creating the directory if needed.
    pub fn at(base: impl Into<PathBuf>) -> Result<Self, BackingError> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Root directory holding the entries.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File path backing `name`.
    pub fn entry_path(&self, name: &str) -> Result<PathBuf, BackingError> {
        validate_name(name)?;
        Ok(self.base.join(format!("{name}.{ENTRY_EXT}")))
    }

    /// Delete the entry for `name`. Returns `false` if it was already absent.
    pub fn remove(&self, name: &str) -> Result<bool, BackingError> {
        let path = self.entry_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed settings entry");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(BackingError::Io(err)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), BackingError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(BackingError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl BackingStore for FsBackingStore {
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>, BackingError> {
        let path = self.entry_path(name)?;
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BackingError::Io(err)),
        }
    }

    // Only binary blobs exist on disk; the kind is not persisted.
    fn set(&self, name: &str, value: &[u8], _kind: ValueKind) -> Result<(), BackingError> {
        let path = self.entry_path(name)?;
        let tmp = self.base.join(format!("{name}.{TEMP_EXT}"));
        fs::create_dir_all(&self.base)?;
        fs::write(&tmp, value)?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(BackingError::Io(err));
        }
        tracing::trace!(path = %path.display(), bytes = value.len(), "wrote settings entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_names_that_escape_the_root() {
        for name in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            assert!(
                matches!(validate_name(name), Err(BackingError::InvalidName(_))),
                "{name:?}"
            );
        }
        assert!(validate_name("CollapseLauncher_ScreenSetting").is_ok());
        assert!(validate_name("a..b").is_ok());
    }
}
