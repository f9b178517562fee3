use anyhow::Context;
use pdf_merge::{Thumbnail, ThumbnailSpec};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// PDFium is not thread-safe; every binding and render goes through this lock.
static PDFIUM_LOCK: Mutex<()> = Mutex::new(());

/// Directories searched for a bundled PDFium before the system library
fn vendored_library_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            dirs.push(dir.to_owned());
        }
    }
    // When running from cargo, the working directory is the workspace root
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join("vendor/pdfium/lib"));
    }
    dirs
}

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> Result<Pdfium, PdfiumError> {
    for dir in vendored_library_dirs() {
        let library = Pdfium::pdfium_platform_library_name_at_path(&dir);
        if !library.exists() {
            continue;
        }
        match Pdfium::bind_to_library(&library) {
            Ok(binding) => return Ok(Pdfium::new(binding)),
            Err(e) => log::debug!("Could not bind {}: {}", library.display(), e),
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// Rasterize the first page of `path` and shrink it to a preview
pub fn render_thumbnail(path: &Path, spec: &ThumbnailSpec) -> anyhow::Result<Thumbnail> {
    let _guard = PDFIUM_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let pdfium = init_pdfium().context("PDFium library unavailable")?;
    let document = pdfium
        .load_pdf_from_file(path, None)
        .with_context(|| format!("Could not open {}", path.display()))?;
    let page = document.pages().get(0).context("Document has no pages")?;

    let config = PdfRenderConfig::new().scale_page_by_factor(spec.render_scale);
    let bitmap = page.render_with_config(&config)?;

    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let rgba = bitmap.as_rgba_bytes().to_vec();

    Ok(Thumbnail::from_rgba(width, height, rgba, spec)?)
}
