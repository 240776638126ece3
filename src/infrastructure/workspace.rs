//! Workspace discovery and layout

use crate::error::{DataHubError, Result};
use crate::infrastructure::config::DATAHUB_DIR;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "store.json";

/// A directory containing `.datahub/config.toml` and `.datahub/store.json`
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the workspace root by walking up from the current directory.
    /// DATAHUB_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DATAHUB_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_datahub_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(DataHubError::Config(format!(
                    "DATAHUB_ROOT is set to '{}' but no .datahub directory found. \
                    Run 'datahub init' in that directory or unset DATAHUB_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_datahub_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DataHubError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_datahub_dir(path: &Path) -> bool {
        path.join(DATAHUB_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_datahub_dir(&self.root)
    }

    /// Create the .datahub directory and write an initial config
    pub fn initialize(&self, config: &Config) -> Result<()> {
        let datahub_dir = self.root.join(DATAHUB_DIR);

        if datahub_dir.exists() {
            return Err(DataHubError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&datahub_dir)?;
        config.save_to_dir(&self.root)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(DATAHUB_DIR).join(STORE_FILE)
    }

    pub fn open_store(&self) -> Result<FileStore> {
        if !self.is_initialized() {
            return Err(DataHubError::NotInitialized(self.root.clone()));
        }
        FileStore::open(self.store_path())
    }
}
