// src/ui/widgets/results.rs

use tracing::debug;

use crate::core::knowledge_base::IndicatorMatcher;
use crate::core::models::ClassifiedResult;
use crate::ui::canvas::{ColorRole, FontRole, PageRole, Paint, ReportPage};
use crate::ui::layout::PageLayout;

/// Renders the raw scanner output for one target inside a bordered frame,
/// weak lines in the alert color.
///
/// Output that does not fit is cut off at the layout's bottom bound; it is
/// not continued on another page.
pub fn render_detail(
    result: &ClassifiedResult,
    matcher: &IndicatorMatcher,
    layout: &PageLayout,
) -> ReportPage {
    let mut page = ReportPage::new(PageRole::Detail);

    page.text(100, 80, format!("Scan Result for: {}", result.target), ColorRole::Ink, FontRole::Header);
    page.rect(
        layout.detail_frame,
        Paint::Outline { width: layout.detail_frame_width },
        ColorRole::Ink,
    );

    let lines: Vec<&str> = result.display_text().lines().collect();
    let shown = lines.len().min(layout.max_detail_lines());
    if shown < lines.len() {
        debug!(target = %result.target, dropped = lines.len() - shown, "Detail output truncated.");
    }

    let mut y = layout.detail_first_line;
    for line in &lines[..shown] {
        let color = if matcher.is_weak(line) { ColorRole::Alert } else { ColorRole::Ink };
        page.text(layout.detail_text_x, y, *line, color, FontRole::Body);
        y += layout.detail_line_height;
    }

    page
}
