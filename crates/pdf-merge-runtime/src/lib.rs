use std::path::PathBuf;
use tokio::sync::mpsc;

// Re-export types from the library crate
pub use pdf_merge::{Inspection, MergeSummary, Thumbnail, ThumbnailSpec};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum MergeCommand {
    /// Open each candidate and report its page count or why it failed.
    /// `session` is echoed back so replies from before a reset can be told apart.
    Inspect {
        paths: Vec<PathBuf>,
        session: u64,
    },
    /// Re-read page counts for the staged files after the table was rebuilt
    CountPages {
        paths: Vec<PathBuf>,
    },
    GenerateThumbnail {
        path: PathBuf,
    },
    Merge {
        inputs: Vec<PathBuf>,
        output: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum MergeUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    Inspected {
        inspections: Vec<Inspection>,
        session: u64,
    },
    /// `None` marks a file that could no longer be opened
    PageCounts {
        counts: Vec<(PathBuf, Option<usize>)>,
    },
    ThumbnailReady {
        path: PathBuf,
        thumbnail: Thumbnail,
    },
    /// No preview can be produced for `path`
    ThumbnailFailed {
        path: PathBuf,
    },
    MergeComplete {
        summary: MergeSummary,
    },
    MergeFailed {
        message: String,
    },
}

pub type CommandSender = mpsc::UnboundedSender<MergeCommand>;
pub type CommandReceiver = mpsc::UnboundedReceiver<MergeCommand>;
pub type UpdateReceiver = mpsc::UnboundedReceiver<MergeUpdate>;

/// Channel pair used by the UI (commands out) and the worker (updates back)
pub fn command_channel() -> (CommandSender, CommandReceiver) {
    mpsc::unbounded_channel()
}

pub fn update_channel() -> (mpsc::UnboundedSender<MergeUpdate>, UpdateReceiver) {
    mpsc::unbounded_channel()
}
