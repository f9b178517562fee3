//! The ordered list of staged documents.
//!
//! Insertion order is display order is merge order. A path appears at most
//! once. The list also owns the thumbnail cache so that dropping an entry
//! always drops its preview.

use crate::io::Inspection;
use crate::thumbnail::ThumbnailCache;
use std::fmt;
use std::path::{Path, PathBuf};

/// Last known page count of a staged document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCount {
    /// A recount has been requested and not answered yet
    #[default]
    Pending,
    Pages(usize),
    /// The file could not be opened on the last recount
    Unreadable,
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCount::Pending => write!(f, "…"),
            PageCount::Pages(n) => write!(f, "{n}"),
            PageCount::Unreadable => write!(f, "Error"),
        }
    }
}

impl From<Option<usize>> for PageCount {
    fn from(count: Option<usize>) -> Self {
        count.map_or(PageCount::Unreadable, PageCount::Pages)
    }
}

/// A staged source PDF
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRef {
    path: PathBuf,
    page_count: PageCount,
}

impl DocumentRef {
    pub fn new(path: PathBuf, page_count: PageCount) -> Self {
        Self { path, page_count }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> PageCount {
        self.page_count
    }
}

/// Which neighbour an entry swaps with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn neighbour(self, index: usize) -> Option<usize> {
        match self {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        }
    }
}

/// Result of staging a batch of inspected paths
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddReport {
    pub added: Vec<PathBuf>,
    pub duplicates: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, String)>,
}

#[derive(Debug)]
pub struct FileList<T> {
    entries: Vec<DocumentRef>,
    selected: Option<usize>,
    thumbnails: ThumbnailCache<T>,
}

impl<T> FileList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            thumbnails: ThumbnailCache::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DocumentRef] {
        &self.entries
    }

    /// Paths in merge order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// Append every successfully inspected path that is not already staged,
    /// in the order given. Failed inspections are reported, not staged.
    pub fn add(&mut self, inspections: impl IntoIterator<Item = Inspection>) -> AddReport {
        let mut report = AddReport::default();

        for Inspection { path, outcome } in inspections {
            if self.contains(&path) {
                report.duplicates.push(path);
                continue;
            }
            match outcome {
                Ok(pages) => {
                    self.entries
                        .push(DocumentRef::new(path.clone(), PageCount::Pages(pages)));
                    report.added.push(path);
                }
                Err(reason) => report.errors.push((path, reason)),
            }
        }

        report
    }

    /// Remove the entry at `index` together with its thumbnail. Out-of-range
    /// indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<DocumentRef> {
        if index >= self.entries.len() {
            return None;
        }

        let removed = self.entries.remove(index);
        self.thumbnails.remove(&removed.path);

        self.selected = match self.selected {
            _ if self.entries.is_empty() => None,
            Some(sel) if sel >= self.entries.len() => Some(self.entries.len() - 1),
            other => other,
        };

        Some(removed)
    }

    /// Swap the entry at `index` with its neighbour in `direction`. Returns
    /// false and changes nothing when either position is out of range. The
    /// selection moves with the entry.
    pub fn move_entry(&mut self, index: usize, direction: Direction) -> bool {
        let Some(target) = direction.neighbour(index) else {
            return false;
        };
        if index >= self.entries.len() || target >= self.entries.len() {
            return false;
        }

        self.entries.swap(index, target);
        self.selected = Some(target);
        true
    }

    /// Drop every entry, the selection and all thumbnails
    pub fn reset(&mut self) {
        self.entries.clear();
        self.selected = None;
        self.thumbnails.clear();
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.entries.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map(|e| e.path.as_path())
    }

    /// Mark every entry as awaiting a recount
    pub fn mark_counts_pending(&mut self) {
        for entry in &mut self.entries {
            entry.page_count = PageCount::Pending;
        }
    }

    /// Apply recount results. Paths no longer staged are ignored.
    pub fn apply_page_counts(&mut self, counts: impl IntoIterator<Item = (PathBuf, Option<usize>)>) {
        for (path, count) in counts {
            if let Some(entry) = self.entries.iter_mut().find(|e| e.path == path) {
                entry.page_count = count.into();
            }
        }
    }

    /// Cache a thumbnail for a staged path. Results for paths that have been
    /// removed in the meantime are dropped; returns whether it was stored.
    pub fn store_thumbnail(&mut self, path: PathBuf, thumbnail: T) -> bool {
        if !self.contains(&path) {
            return false;
        }
        self.thumbnails.insert(path, thumbnail);
        true
    }

    pub fn thumbnail(&self, path: &Path) -> Option<&T> {
        self.thumbnails.get(path)
    }

    pub fn thumbnails(&self) -> &ThumbnailCache<T> {
        &self.thumbnails
    }
}

impl<T> Default for FileList<T> {
    fn default() -> Self {
        Self::new()
    }
}
