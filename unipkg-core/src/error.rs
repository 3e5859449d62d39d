use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnipkgError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, UnipkgError>;
