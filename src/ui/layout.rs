// src/ui/layout.rs

use color_eyre::eyre::{Result, eyre};
use serde::{Deserialize, Serialize};

use crate::ui::canvas::Bounds;

/// Page geometry shared by the compositor and the exporter.
///
/// The cover page uses fixed offsets inside this canvas; the summary and
/// detail pages take their bounds from here so tests can shrink them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub width: i32,
    pub height: i32,
    /// Size the optional cover image is resized to.
    pub cover_image_width: u32,
    pub cover_image_height: u32,
    /// First line of a summary page.
    pub summary_top: i32,
    /// A summary line starting below this goes to a continuation page.
    pub summary_bottom: i32,
    pub detail_frame: Bounds,
    pub detail_frame_width: u32,
    pub detail_text_x: i32,
    pub detail_first_line: i32,
    pub detail_line_height: i32,
    /// A detail line starting below this is dropped, along with the rest.
    pub detail_bottom: i32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1400,
            cover_image_width: 1000,
            cover_image_height: 1454,
            summary_top: 150,
            summary_bottom: 1300,
            detail_frame: Bounds::new(50, 200, 950, 1350),
            detail_frame_width: 3,
            detail_text_x: 70,
            detail_first_line: 220,
            detail_line_height: 25,
            detail_bottom: 1300,
        }
    }
}

impl PageLayout {
    /// How many raw output lines fit on a detail page.
    pub fn max_detail_lines(&self) -> usize {
        if self.detail_first_line > self.detail_bottom {
            return 0;
        }
        ((self.detail_bottom - self.detail_first_line) / self.detail_line_height + 1) as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(eyre!("page size must be positive, got {}x{}", self.width, self.height));
        }
        if self.cover_image_width == 0 || self.cover_image_height == 0 {
            return Err(eyre!("cover image size must be positive"));
        }
        if self.detail_line_height <= 0 {
            return Err(eyre!("detail line height must be positive"));
        }
        if self.summary_top >= self.summary_bottom {
            return Err(eyre!("summary_top must be above summary_bottom"));
        }
        Ok(())
    }
}
