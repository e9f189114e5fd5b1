// src/ui/widgets/summary.rs

use crate::core::models::{ClassifiedResult, Verdict};
use crate::ui::canvas::{ColorRole, FontRole, PageRole, ReportPage};
use crate::ui::layout::PageLayout;

const HEADING_X: i32 = 100;
const TARGET_X: i32 = 120;
const ISSUE_X: i32 = 140;

const HEADING_ADVANCE: i32 = 50;
const TARGET_ADVANCE: i32 = 30;
const ISSUE_ADVANCE: i32 = 25;
const SECTION_GAP: i32 = 50;
const GROUP_GAP: i32 = 20;

/// Writes lines top to bottom, opening a continuation page whenever the
/// cursor has passed the layout's summary bound.
struct SummaryWriter<'a> {
    layout: &'a PageLayout,
    pages: Vec<ReportPage>,
    current: ReportPage,
    y: i32,
}

impl<'a> SummaryWriter<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            pages: Vec::new(),
            current: ReportPage::new(PageRole::Summary),
            y: layout.summary_top,
        }
    }

    fn line(&mut self, x: i32, text: String, color: ColorRole, font: FontRole, advance: i32) {
        if self.y > self.layout.summary_bottom && !self.current.is_empty() {
            let full = std::mem::replace(&mut self.current, ReportPage::new(PageRole::Summary));
            self.pages.push(full);
            self.y = self.layout.summary_top;
        }
        self.current.text(x, self.y, text, color, font);
        self.y += advance;
    }

    fn gap(&mut self, height: i32) {
        self.y += height;
    }

    fn finish(mut self) -> Vec<ReportPage> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Renders the summary section: strong targets first, then weak targets with
/// the lines that flagged them. Returns one page, plus continuation pages when
/// the list outgrows it.
pub fn render_summary(results: &[ClassifiedResult], layout: &PageLayout) -> Vec<ReportPage> {
    let mut writer = SummaryWriter::new(layout);

    // --- Strong targets ---
    writer.line(HEADING_X, " Strong Cipher Configuration:".to_string(), ColorRole::Ink, FontRole::Header, HEADING_ADVANCE);

    let strong: Vec<&ClassifiedResult> = results.iter().filter(|r| r.verdict == Verdict::Strong).collect();
    if strong.is_empty() {
        writer.line(TARGET_X, " No strong cipher configurations found!".to_string(), ColorRole::Ink, FontRole::Body, TARGET_ADVANCE);
    }
    for result in strong {
        writer.line(TARGET_X, format!(" {}", result.target), ColorRole::Ink, FontRole::Body, TARGET_ADVANCE);
    }

    writer.gap(SECTION_GAP);

    // --- Weak or unverified targets ---
    writer.line(HEADING_X, " Weak Ciphers/Protocols Detected:".to_string(), ColorRole::Ink, FontRole::Header, HEADING_ADVANCE);

    let weak: Vec<&ClassifiedResult> = results.iter().filter(|r| r.verdict != Verdict::Strong).collect();
    if weak.is_empty() {
        writer.line(TARGET_X, " No weak configurations detected!".to_string(), ColorRole::Ink, FontRole::Body, TARGET_ADVANCE);
    }
    for result in weak {
        match result.verdict {
            Verdict::Unknown => {
                writer.line(TARGET_X, format!(" {}: unverified", result.target), ColorRole::Ink, FontRole::Body, TARGET_ADVANCE);
                writer.line(
                    ISSUE_X,
                    " No scan output; configuration could not be verified.".to_string(),
                    ColorRole::Warning,
                    FontRole::Body,
                    ISSUE_ADVANCE,
                );
            }
            _ => {
                writer.line(
                    TARGET_X,
                    format!(" {}: {} risk", result.target, result.tier),
                    ColorRole::Ink,
                    FontRole::Body,
                    TARGET_ADVANCE,
                );
                for issue in &result.matched_lines {
                    writer.line(ISSUE_X, format!(" {}", issue.trim()), ColorRole::Alert, FontRole::Body, ISSUE_ADVANCE);
                }
            }
        }
        writer.gap(GROUP_GAP);
    }

    writer.finish()
}
