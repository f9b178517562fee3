//! Projection of the staged file list into display rows.

use crate::file_list::{FileList, PageCount};
use std::path::{Path, PathBuf};

/// One displayed row: 1-based position, base file name and page count
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub position: usize,
    pub name: String,
    pub pages: PageCount,
    pub path: PathBuf,
}

/// Rebuild every row from the current list. Rows are never patched in place.
pub fn rebuild_rows<T>(list: &FileList<T>) -> Vec<TableRow> {
    list.entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| TableRow {
            position: index + 1,
            name: display_name(entry.path()),
            pages: entry.page_count(),
            path: entry.path().to_owned(),
        })
        .collect()
}

/// Base file name of `path`, falling back to the full path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
