//! Task store - JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::error::Result;
use super::model::Task;
use super::{get_app_dir, Config, STORE_FILE};

pub struct Storage {
    store_path: PathBuf,
}

impl Storage {
    /// Open the default store: the configured `data_file` override when set,
    /// otherwise `tasks.json` in the app directory.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let store_path = match config.data_file_path() {
            Some(path) => path,
            None => get_app_dir()?.join(STORE_FILE),
        };
        Ok(Self { store_path })
    }

    /// Open a store at an explicit path.
    pub fn with_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Load the full task collection. A missing, empty, or whitespace-only
    /// file is a valid initial state and yields an empty collection.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.store_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.store_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Overwrite the store with the full collection. The content is written
    /// to a sibling temp file and renamed into place, so a failed write
    /// leaves the previous store untouched.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Create backup
        if self.store_path.exists() {
            let backup_path = self.store_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.store_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        let tmp_path = self.store_path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.store_path)?;
        Ok(())
    }
}
