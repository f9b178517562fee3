//! Core of the PDF merger: staging list, thumbnails and the merge pipeline.

pub mod drop;
mod error;
mod file_list;
mod io;
mod merge;
mod table;
mod thumbnail;

pub use error::*;
pub use file_list::{AddReport, Direction, DocumentRef, FileList, PageCount};
pub use io::{Inspection, inspect_paths, load_pdf, page_count, partial_path, save_pdf};
pub use merge::{
    DEFAULT_EXTENSION, DEFAULT_OUTPUT_NAME, MergeSummary, MergedDocument, merge_files,
    output_path_from,
};
pub use table::{TableRow, display_name, rebuild_rows};
pub use thumbnail::{Thumbnail, ThumbnailCache, ThumbnailSpec, fit_within};
