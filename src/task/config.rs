//! User configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::Result;
use super::get_app_dir;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the task store location. Only a leading `~/` is
    /// expanded against the home directory; bare `~` and `~user/...` forms
    /// are passed through as literal paths. Unset means
    /// `<app-dir>/tasks.json`.
    #[serde(default)]
    pub data_file: Option<String>,
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolved store path override, if configured.
    pub fn data_file_path(&self) -> Option<PathBuf> {
        let raw = self.data_file.as_ref()?;
        if let Some(stripped) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(home.join(stripped));
            }
        }
        Some(PathBuf::from(raw))
    }
}
