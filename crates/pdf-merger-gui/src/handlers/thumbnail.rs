use pdf_merge::ThumbnailSpec;
use pdf_merge_runtime::MergeUpdate;
use std::path::PathBuf;

use crate::worker::UpdateSender;

/// Render a preview off the UI thread. Failures are logged and reported as
/// `ThumbnailFailed`; the cache never gets an entry for `path`.
#[cfg(feature = "thumbnails")]
pub async fn handle_generate(path: PathBuf, spec: ThumbnailSpec, updates: UpdateSender) {
    let render_path = path.clone();
    let rendered =
        tokio::task::spawn_blocking(move || crate::pdfium::render_thumbnail(&render_path, &spec))
            .await;

    match rendered {
        Ok(Ok(thumbnail)) => {
            log::debug!(
                "Thumbnail {}x{} ready for {}",
                thumbnail.width,
                thumbnail.height,
                path.display()
            );
            updates.send(MergeUpdate::ThumbnailReady { path, thumbnail });
        }
        Ok(Err(e)) => {
            log::warn!("Error generating thumbnail for {}: {:#}", path.display(), e);
            updates.send(MergeUpdate::ThumbnailFailed { path });
        }
        Err(e) => {
            log::warn!("Thumbnail task for {} failed: {}", path.display(), e);
            updates.send(MergeUpdate::ThumbnailFailed { path });
        }
    }
}

#[cfg(not(feature = "thumbnails"))]
pub async fn handle_generate(path: PathBuf, _spec: ThumbnailSpec, updates: UpdateSender) {
    log::info!(
        "Previews unavailable (thumbnails feature disabled), skipping {}",
        path.display()
    );
    updates.send(MergeUpdate::ThumbnailFailed { path });
}
