use pdf_merge_runtime::MergeUpdate;
use std::path::PathBuf;

use crate::worker::UpdateSender;

pub async fn handle_inspect(paths: Vec<PathBuf>, session: u64, updates: &UpdateSender) {
    let inspections = pdf_merge::inspect_paths(&paths).await;

    for inspection in &inspections {
        match &inspection.outcome {
            Ok(pages) => log::info!("Staged {} ({} pages)", inspection.path.display(), pages),
            Err(reason) => log::warn!("Could not open {}: {}", inspection.path.display(), reason),
        }
    }

    updates.send(MergeUpdate::Inspected {
        inspections,
        session,
    });
}

pub async fn handle_count_pages(paths: Vec<PathBuf>, updates: &UpdateSender) {
    let mut counts = Vec::with_capacity(paths.len());

    for path in paths {
        let count = match pdf_merge::page_count(&path).await {
            Ok(pages) => Some(pages),
            Err(e) => {
                log::warn!("Error refreshing page count: {e}");
                None
            }
        };
        counts.push((path, count));
    }

    updates.send(MergeUpdate::PageCounts { counts });
}
