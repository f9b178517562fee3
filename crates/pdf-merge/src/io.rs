//! Document I/O: loading sources, counting pages and writing the merged output.

use crate::error::*;
use lopdf::Document;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Outcome of opening one candidate file before it is staged.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub path: PathBuf,
    /// Page count on success, a human-readable reason otherwise.
    pub outcome: std::result::Result<usize, String>,
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Open a document and return how many pages it has
pub async fn page_count(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let doc = load_pdf(path).await.map_err(|e| MergeError::Unreadable {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(doc.get_pages().len())
}

/// Open every candidate in order. A failure is recorded against its path and
/// does not stop the remaining candidates from being checked.
pub async fn inspect_paths(paths: &[PathBuf]) -> Vec<Inspection> {
    let mut inspections = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = match load_pdf(path).await {
            Ok(doc) => Ok(doc.get_pages().len()),
            Err(e) => Err(e.to_string()),
        };
        inspections.push(Inspection {
            path: path.clone(),
            outcome,
        });
    }
    inspections
}

/// Serialize `doc` and place it at `path`.
///
/// The bytes go to a hidden sibling file first and are renamed over `path`
/// only once fully written, so a failed save never leaves a truncated file
/// at the destination.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, MergeError>(writer)
    })
    .await??;

    let partial = partial_path(&path);
    if let Err(e) = tokio::fs::write(&partial, bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&partial, &path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}

/// Scratch location used while writing `path`
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new("merged.pdf")));
    name.push(".partial");
    path.with_file_name(name)
}
