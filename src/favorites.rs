//! Persistent favorites store
//!
//! Favorite break names live in a JSON file under the XDG data directory
//! (`~/.local/share/wavereader/favorites.json` on Linux). Every mutation is
//! written through immediately so a crash never loses more than nothing.
//! Persistence sits behind a small key-value trait so the store is testable
//! without touching the real data directory.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Storage key for the favorites list
const FAVORITES_KEY: &str = "favorites";

/// Minimal string key-value persistence seam
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
    /// Removes `key` if present
    fn remove(&mut self, key: &str) -> std::io::Result<()>;
}

/// Key-value store backed by one JSON file per key in a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the XDG data directory.
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "wavereader")?;
        Some(Self {
            dir: project_dirs.data_dir().to_path_buf(),
        })
    }

    /// Creates a store rooted at a custom directory, for tests
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl KeyValueStore for Box<dyn KeyValueStore> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store for tests and for running without a home directory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Ordered list of favorite break names with write-through persistence.
///
/// Names keep insertion order. A missing or corrupt stored list loads as
/// empty rather than erroring, so a bad file never blocks startup.
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    names: Vec<String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Loads the favorites list from the backing store
    pub fn load(store: S) -> Self {
        let names = store
            .get(FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { store, names }
    }

    /// The favorite names in insertion order
    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Adds a name if not already present; no-op duplicates don't rewrite
    pub fn add(&mut self, name: &str) -> std::io::Result<()> {
        if self.is_favorite(name) {
            return Ok(());
        }
        self.names.push(name.to_string());
        self.persist()
    }

    /// Removes a name if present
    pub fn remove(&mut self, name: &str) -> std::io::Result<()> {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        if self.names.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Adds the name if absent, removes it if present. Returns whether the
    /// name is a favorite afterwards.
    pub fn toggle(&mut self, name: &str) -> std::io::Result<bool> {
        if self.is_favorite(name) {
            self.remove(name)?;
            Ok(false)
        } else {
            self.add(name)?;
            Ok(true)
        }
    }

    fn persist(&mut self) -> std::io::Result<()> {
        let json = serde_json::to_string(&self.names)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.store.set(FAVORITES_KEY, &json)
    }
}
