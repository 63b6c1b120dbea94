//! Task model, repository, and persistence

pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod storage;

pub use config::Config;
pub use error::{StorageError, ValidationError};
pub use manager::TaskManager;
pub use model::{Priority, Status, Task, TaskEdit};
pub use storage::Storage;

use std::path::PathBuf;

/// File name of the task store inside the app directory.
pub const STORE_FILE: &str = "tasks.json";

/// App data directory (`~/.tarefa`), created on first use.
pub fn get_app_dir() -> error::Result<PathBuf> {
    let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
    let dir = home.join(".tarefa");
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
