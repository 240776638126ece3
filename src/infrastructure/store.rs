//! Key-value store adapters
//!
//! The store is a flat string-to-string mapping, the same shape as browser
//! local storage. Collections are serialized into it as JSON text by
//! [`crate::infrastructure::collection`].

use crate::error::{DataHubError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous key-value storage.
///
/// Mutation takes `&mut self`, so a single store value has exactly one
/// writer at a time.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&str>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, contents are lost on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object file.
///
/// The file is read once on open and rewritten as a whole after every
/// mutation. Two handles on the same file do not see each other's writes;
/// whichever writes last wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = Self::read_entries(&path)?;
        log::debug!(
            "event=store_open module=store status=ok path={} keys={}",
            path.display(),
            entries.len()
        );
        Ok(FileStore { path, entries })
    }

    /// Discard the in-memory copy and re-read the file
    pub fn reload(&mut self) -> Result<()> {
        self.entries = Self::read_entries(&self.path)?;
        Ok(())
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(DataHubError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            DataHubError::Store(format!(
                "Failed to parse store file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the whole map to disk via a temp file and rename
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
