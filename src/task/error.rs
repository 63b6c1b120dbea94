use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid deadline '{0}': expected YYYY-MM-DD")]
    InvalidDeadline(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Store is not readable or writable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store content is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
