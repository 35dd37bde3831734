//! Storage port for save payloads.
//!
//! The engine hands the store an opaque payload plus a name; the store
//! owns directories, filenames, and listing. [`MemoryStore`] backs tests
//! and embeddings; [`FileStore`] is the shell's file-backed default.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::PersistError;

/// Extension used for save files.
const SAVE_EXT: &str = "sav";

/// Named storage for save payloads.
pub trait SaveStore {
    /// Persist a payload under a name, replacing any previous payload.
    /// Writes are atomic: a failed write never leaves a readable
    /// partial save.
    fn write(&mut self, name: &str, payload: &[u8]) -> Result<(), PersistError>;

    /// Read back the payload stored under a name.
    fn read(&self, name: &str) -> Result<Vec<u8>, PersistError>;

    /// Existing save names, newest-looking first (reverse lexicographic).
    fn list(&self) -> Result<Vec<String>, PersistError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saves: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn write(&mut self, name: &str, payload: &[u8]) -> Result<(), PersistError> {
        self.saves.insert(name.to_string(), payload.to_vec());
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, PersistError> {
        self.saves
            .get(name)
            .cloned()
            .ok_or_else(|| PersistError::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>, PersistError> {
        let mut names: Vec<String> = self.saves.keys().cloned().collect();
        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }
}

/// Directory-backed store writing one `.sav` file per save.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a save directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory saves live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SAVE_EXT}"))
    }
}

impl SaveStore for FileStore {
    fn write(&mut self, name: &str, payload: &[u8]) -> Result<(), PersistError> {
        // Write to a temp file, then rename into place. Readers never
        // observe a half-written save.
        let target = self.path_for(name);
        let tmp = self.dir.join(format!(".{name}.{SAVE_EXT}.tmp"));

        let mut file = fs::File::create(&tmp)?;
        file.write_all(payload)?;
        file.sync_all()?;
        fs::rename(&tmp, &target)?;

        log::debug!("saved '{}' ({} bytes)", name, payload.len());
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, PersistError> {
        let path = self.path_for(name);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PersistError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<String>, PersistError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(SAVE_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.write("slot1", b"payload").unwrap();

        assert_eq!(store.read("slot1").unwrap(), b"payload");
    }

    #[test]
    fn test_memory_store_missing_name() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.read("nothing"),
            Err(PersistError::NotFound(_))
        ));
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.write("slot", b"old").unwrap();
        store.write("slot", b"new").unwrap();

        assert_eq!(store.read("slot").unwrap(), b"new");
        assert_eq!(store.list().unwrap(), vec!["slot"]);
    }

    #[test]
    fn test_memory_store_list_reverse_sorted() {
        let mut store = MemoryStore::new();
        store.write("alpha", b"a").unwrap();
        store.write("beta", b"b").unwrap();

        assert_eq!(store.list().unwrap(), vec!["beta", "alpha"]);
    }
}
