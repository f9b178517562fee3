use pdf_merge_runtime::MergeUpdate;
use std::path::PathBuf;

use crate::worker::UpdateSender;

pub async fn handle_merge(inputs: Vec<PathBuf>, output: PathBuf, updates: UpdateSender) {
    log::info!(
        "Merging {} file(s) into {}",
        inputs.len(),
        output.display()
    );

    updates.send(MergeUpdate::Progress {
        operation: "Merging PDFs...".to_string(),
        current: 0,
        total: inputs.len(),
    });

    let progress = updates.clone();
    let result = pdf_merge::merge_files(&inputs, &output, move |current, total| {
        progress.send(MergeUpdate::Progress {
            operation: format!("Merging file {current}/{total}..."),
            current,
            total,
        });
    })
    .await;

    match result {
        Ok(summary) => {
            log::info!(
                "Wrote {} pages from {} file(s) to {}",
                summary.total_pages,
                summary.file_count,
                summary.output.display()
            );
            updates.send(MergeUpdate::MergeComplete { summary });
        }
        Err(e) => {
            log::error!("Merge failed: {e}");
            updates.send(MergeUpdate::MergeFailed {
                message: format!("Failed to merge PDFs:\n{e}"),
            });
        }
    }
}
