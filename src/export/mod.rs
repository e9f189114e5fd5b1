// src/export/mod.rs

// Turning composed pages into files: the PDF document, its assets, and the
// optional JSON sidecar.
pub mod assets;
pub mod fonts;
pub mod json;
pub mod pdf;

use std::path::Path;

use color_eyre::eyre::Result;

use crate::ui::canvas::ReportPage;
use self::assets::CoverImage;

/// Final destination of a composed report.
///
/// A failed write is fatal for the run and is returned to the caller; nothing
/// upstream is retried.
pub trait DocumentSink {
    fn export(&self, pages: &[ReportPage], cover: Option<&CoverImage>, path: &Path) -> Result<()>;
}
