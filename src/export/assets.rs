// src/export/assets.rs

use std::path::Path;

use image::imageops::FilterType;
use tracing::{info, warn};

/// A decoded cover image, already resized, as packed 8-bit RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Loads and resizes the optional cover image.
///
/// A missing or unreadable image never fails the run: it is logged and the
/// document is produced without an image page.
pub fn load_cover_image(path: &Path, width: u32, height: u32) -> Option<CoverImage> {
    if !path.exists() {
        warn!(path = %path.display(), "Cover image not found, skipping cover page.");
        return None;
    }

    match image::open(path) {
        Ok(img) => {
            let rgb = img.resize_exact(width, height, FilterType::Triangle).to_rgb8();
            info!(path = %path.display(), width, height, "Loaded cover image.");
            Some(CoverImage { width, height, rgb: rgb.into_raw() })
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not decode cover image, skipping cover page.");
            None
        }
    }
}
