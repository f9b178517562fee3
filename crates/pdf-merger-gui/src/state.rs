use eframe::egui;
use pdf_merge::{Direction, FileList, Inspection, MergeSummary, output_path_from};
use pdf_merge_runtime::{CommandSender, MergeCommand};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A message the user has to acknowledge
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct ProgressState {
    pub operation: String,
    pub current: usize,
    pub total: usize,
}

/// Everything the window shows. Owned by the app and only touched on the UI
/// thread; background work reaches it through `MergeUpdate`s.
pub struct AppState {
    pub files: FileList<egui::TextureHandle>,
    pub output_path: String,
    pub status: String,
    pub progress: Option<ProgressState>,
    pub merging: bool,
    /// Result of the last successful merge; drives the post-merge actions
    pub last_merge: Option<MergeSummary>,
    pub notices: VecDeque<Notice>,
    pub hovering_files: bool,
    /// Staged paths whose preview could not be rendered
    preview_failures: HashSet<PathBuf>,
    /// Bumped on every reset. File checks carry it so that replies to a
    /// request made before the reset are discarded.
    session: u64,
    default_output_name: &'static str,
}

impl AppState {
    pub fn new(default_output_name: &'static str) -> Self {
        Self {
            files: FileList::new(),
            output_path: default_output_name.to_string(),
            status: "Ready".to_string(),
            progress: None,
            merging: false,
            last_merge: None,
            notices: VecDeque::new(),
            hovering_files: false,
            preview_failures: HashSet::new(),
            session: 0,
            default_output_name,
        }
    }

    /// Ask the worker to open candidate files. Paths already staged, or
    /// repeated within the batch, are dropped before anything is opened.
    pub fn request_add(&mut self, paths: Vec<PathBuf>, commands: &CommandSender) {
        let mut seen = HashSet::new();
        let fresh: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| !self.files.contains(p) && seen.insert(p.clone()))
            .collect();

        if fresh.is_empty() {
            self.status = format!("No new files. Total: {}", self.files.len());
            return;
        }

        self.status = format!("Checking {} file(s)...", fresh.len());
        let session = self.session;
        self.dispatch(
            commands,
            MergeCommand::Inspect {
                paths: fresh,
                session,
            },
        );
    }

    pub fn apply_inspections(
        &mut self,
        inspections: Vec<Inspection>,
        session: u64,
        commands: &CommandSender,
    ) {
        if session != self.session {
            log::debug!(
                "Discarding {} file check(s) requested before reset",
                inspections.len()
            );
            return;
        }

        let report = self.files.add(inspections);

        for (path, reason) in &report.errors {
            self.notices.push_back(Notice::error(format!(
                "Could not open {}:\n{}",
                path.display(),
                reason
            )));
        }
        for path in &report.added {
            self.dispatch(
                commands,
                MergeCommand::GenerateThumbnail { path: path.clone() },
            );
        }

        self.status = format!(
            "Added {} files. Total: {}",
            report.added.len(),
            self.files.len()
        );
    }

    /// Select a row. A missing preview is requested on first selection
    /// unless rendering it already failed.
    pub fn select(&mut self, index: usize, commands: &CommandSender) {
        self.files.select(Some(index));

        let missing = self
            .files
            .selected_path()
            .filter(|path| self.files.thumbnail(path).is_none() && !self.preview_failed(path))
            .map(|path| path.to_owned());
        if let Some(path) = missing {
            self.dispatch(commands, MergeCommand::GenerateThumbnail { path });
        }
    }

    pub fn move_selected(&mut self, direction: Direction, commands: &CommandSender) {
        let Some(index) = self.files.selected() else {
            return;
        };
        if self.files.move_entry(index, direction) {
            self.rebuild_view(commands);
        }
    }

    pub fn remove_selected(&mut self, commands: &CommandSender) {
        let Some(index) = self.files.selected() else {
            return;
        };
        if let Some(removed) = self.files.remove(index) {
            self.preview_failures.remove(removed.path());
            self.status = format!("Removed 1 file. Total: {}", self.files.len());
            self.rebuild_view(commands);
        }
    }

    /// Full table rebuild after a structural change: every page count is
    /// re-read since files may have changed on disk since they were added.
    fn rebuild_view(&mut self, commands: &CommandSender) {
        self.files.mark_counts_pending();
        if !self.files.is_empty() {
            let paths = self.files.paths();
            self.dispatch(commands, MergeCommand::CountPages { paths });
        }
    }

    pub fn store_thumbnail(&mut self, path: PathBuf, texture: egui::TextureHandle) {
        self.preview_failures.remove(&path);
        if !self.files.store_thumbnail(path.clone(), texture) {
            log::debug!("Dropping thumbnail for unstaged {}", path.display());
        }
    }

    pub fn mark_preview_failed(&mut self, path: PathBuf) {
        if self.files.contains(&path) && self.files.thumbnail(&path).is_none() {
            self.preview_failures.insert(path);
        }
    }

    pub fn preview_failed(&self, path: &Path) -> bool {
        self.preview_failures.contains(path)
    }

    /// Validate and start a merge. Returns whether a merge was started.
    pub fn request_merge(&mut self, commands: &CommandSender) -> bool {
        if self.merging {
            return false;
        }
        if self.files.is_empty() {
            self.notices
                .push_back(Notice::warning("No PDF files to merge!"));
            return false;
        }
        let Some(output) = output_path_from(&self.output_path) else {
            self.notices
                .push_back(Notice::warning("Please specify output file path!"));
            return false;
        };

        self.last_merge = None;
        self.merging = true;
        self.status = "Merging PDFs...".to_string();
        self.dispatch(
            commands,
            MergeCommand::Merge {
                inputs: self.files.paths(),
                output,
            },
        );
        self.merging
    }

    pub fn apply_progress(&mut self, progress: ProgressState) {
        if self.merging {
            self.status = progress.operation.clone();
        }
        self.progress = Some(progress);
    }

    pub fn apply_merge_complete(&mut self, summary: MergeSummary) {
        self.merging = false;
        self.progress = None;
        self.status = format!("Success: {}", summary.output_name());
        self.notices
            .push_back(Notice::info("Success", summary.message()));
        self.last_merge = Some(summary);
    }

    pub fn apply_merge_failed(&mut self, message: String) {
        self.merging = false;
        self.progress = None;
        self.status = "Merge failed".to_string();
        self.notices.push_back(Notice::error(message));
    }

    /// Back to the initial empty state for another merge
    pub fn reset(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.files.reset();
        self.preview_failures.clear();
        self.output_path = self.default_output_name.to_string();
        self.last_merge = None;
        self.progress = None;
        self.status = "Ready for next merge".to_string();
    }

    fn dispatch(&mut self, commands: &CommandSender, command: MergeCommand) {
        if commands.send(command).is_err() {
            log::error!("Background worker is not running");
            self.merging = false;
            self.notices
                .push_back(Notice::error("Background worker is not running."));
        }
    }
}
