use crate::reference::ReferenceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatenaError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("Could not find commentary database at {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CatenaError {
    /// True when the error comes from what the user typed, not from the system.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CatenaError::Reference(e) if e.is_user_error())
    }
}

pub type Result<T> = std::result::Result<T, CatenaError>;
