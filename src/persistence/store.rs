use super::files::{atomic_write, read_file};
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Key/value storage consumed by the task store and the theme preference.
///
/// Mirrors the browser-local-storage shape the app grew up with: `load`
/// returns the stored string or absence, `save` replaces it wholesale.
pub trait KvStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key is a file inside the daylist directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl KvStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        read_file(self.dir.join(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.dir.join(key), value)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    save_count: usize,
}

/// In-memory store. Clones share the same underlying map, so a test can keep
/// a handle and inspect what the task store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for a key, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Number of `save` calls observed across all clones.
    pub fn save_count(&self) -> usize {
        self.inner.borrow().save_count
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.insert(key.to_string(), value.to_string());
        inner.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.load("tasks.json").unwrap(), None);

        store.save("tasks.json", "[]").unwrap();
        assert_eq!(store.load("tasks.json").unwrap().as_deref(), Some("[]"));

        store.save("tasks.json", "[1]").unwrap();
        assert_eq!(store.load("tasks.json").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("tasks.json").unwrap(), None);
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_shares_state_across_clones() {
        let store = MemoryStore::new();
        let mut writer = store.clone();

        writer.save("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.save_count(), 1);
    }
}
