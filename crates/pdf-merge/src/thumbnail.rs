//! First-page preview bitmaps and the per-path cache that holds them.

use crate::error::*;
use image::{RgbaImage, imageops};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// How previews are rendered and sized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailSpec {
    /// Longest edge of the preview box, in pixels
    pub max_edge: u32,
    /// Fraction of the page's native size used when rasterizing
    pub render_scale: f32,
}

impl Default for ThumbnailSpec {
    fn default() -> Self {
        Self {
            max_edge: 120,
            render_scale: 0.2,
        }
    }
}

/// An RGBA preview of a document's first page
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl Thumbnail {
    /// Build a thumbnail from a rendered bitmap, shrinking it to fit inside
    /// a `max_edge` square with its aspect ratio preserved. Never upscales.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>, spec: &ThumbnailSpec) -> Result<Self> {
        let bitmap = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            MergeError::Thumbnail(format!("bitmap data does not match {width}x{height}"))
        })?;

        let (fit_w, fit_h) = fit_within(width, height, spec.max_edge);
        let bitmap = if (fit_w, fit_h) == (width, height) {
            bitmap
        } else {
            imageops::thumbnail(&bitmap, fit_w, fit_h)
        };

        Ok(Self {
            width: bitmap.width() as usize,
            height: bitmap.height() as usize,
            rgba: bitmap.into_raw(),
        })
    }
}

/// Largest size no bigger than `max_edge` on either side with the same aspect
/// ratio as `width`x`height`
pub fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }
    let scale = f64::from(max_edge) / f64::from(width.max(height));
    let scaled = |edge: u32| ((f64::from(edge) * scale).round() as u32).clamp(1, max_edge);
    (scaled(width), scaled(height))
}

/// Previews keyed by document path. At most one entry per path; a later
/// insert for the same path replaces the earlier one.
#[derive(Debug)]
pub struct ThumbnailCache<T> {
    entries: HashMap<PathBuf, T>,
}

impl<T> ThumbnailCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, path: PathBuf, thumbnail: T) {
        self.entries.insert(path, thumbnail);
    }

    pub fn get(&self, path: &Path) -> Option<&T> {
        self.entries.get(path)
    }

    pub fn remove(&mut self, path: &Path) -> Option<T> {
        self.entries.remove(path)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ThumbnailCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
