use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Could not open {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
    #[error("Malformed page tree: {0}")]
    Structure(String),
    #[error("Thumbnail error: {0}")]
    Thumbnail(String),
    #[error("No PDF files to merge")]
    NoInputFiles,
    #[error("No output file path specified")]
    NoOutputPath,
}

pub type Result<T> = std::result::Result<T, MergeError>;
