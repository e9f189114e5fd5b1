// src/ui/widgets/cover.rs

use crate::config::ReportMetadata;
use crate::core::models::ScanSummary;
use crate::ui::ScanStamp;
use crate::ui::canvas::{Bounds, ColorRole, FontRole, PageRole, Paint, ReportPage};
use crate::ui::layout::PageLayout;

const BANNER_HEIGHT: i32 = 200;
const FOOTER_HEIGHT: i32 = 150;
const LEFT: i32 = 100;

/// Renders the cover page: title banner, report metadata, the findings
/// summary and the confidentiality footer.
///
/// Every position is a constant; only the text varies with the input.
pub fn render_cover(
    metadata: &ReportMetadata,
    stamp: &ScanStamp,
    summary: &ScanSummary,
    layout: &PageLayout,
) -> ReportPage {
    let mut page = ReportPage::new(PageRole::Cover);

    // --- Banner ---
    page.rect(Bounds::new(0, 0, layout.width, BANNER_HEIGHT), Paint::Fill, ColorRole::Ink);
    page.text(250, 80, &metadata.title, ColorRole::Alert, FontRole::Title);

    let footer_top = layout.height - FOOTER_HEIGHT;
    page.rect(Bounds::new(0, footer_top, layout.width, layout.height), Paint::Fill, ColorRole::Ink);
    page.text(300, footer_top + 50, &metadata.footer, ColorRole::Alert, FontRole::Header);

    // --- Report details ---
    let details = [
        (300, format!("Prepared by: {}", metadata.preparer)),
        (350, format!("Date: {}", stamp.scan_date)),
        (400, format!("Report ID: {}", stamp.report_id)),
        (500, format!("Scope: {}", metadata.scope)),
        (550, format!("Assessment Methodology: {}", metadata.methodology)),
        (600, format!("Scanner Used: {}", metadata.tool)),
    ];
    for (y, text) in details {
        page.text(LEFT, y, text, ColorRole::Ink, FontRole::Header);
    }

    // --- Findings summary ---
    page.text(LEFT, 700, " Security Findings Summary:", ColorRole::Alert, FontRole::Header);

    let mut findings = vec![
        (750, format!("• Number of Targets Scanned: {}", summary.total), ColorRole::Ink),
        (800, format!("• Targets with Strong Ciphers: {}", summary.strong), ColorRole::Positive),
        (850, format!("• Targets with Weak Ciphers: {}", summary.weak), ColorRole::Alert),
        (900, format!("• High-Risk Findings: {}", summary.high), ColorRole::Alert),
        (950, format!("• Medium-Risk Findings: {}", summary.medium), ColorRole::Warning),
        (1000, format!("• Recommended Actions: {}", metadata.recommended_action), ColorRole::Ink),
    ];
    if summary.unknown > 0 {
        findings.push((
            1050,
            format!("• Targets Without Scan Output: {}", summary.unknown),
            ColorRole::Warning,
        ));
    }
    for (y, text, color) in findings {
        page.text(LEFT, y, text, color, FontRole::Body);
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::DrawInstruction;

    fn stamp() -> ScanStamp {
        ScanStamp {
            scan_date: "2025-03-01 09:30:00".to_string(),
            report_id: "TLS-SEC-20250301-093000".to_string(),
        }
    }

    fn color_of(page: &ReportPage, prefix: &str) -> Option<ColorRole> {
        page.instructions.iter().find_map(|i| match i {
            DrawInstruction::Text { text, color, .. } if text.starts_with(prefix) => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn test_cover_shows_metadata_and_counts() {
        let summary = ScanSummary { total: 3, strong: 1, weak: 2, high: 1, medium: 1, ..Default::default() };
        let page = render_cover(&ReportMetadata::default(), &stamp(), &summary, &PageLayout::default());
        let texts: Vec<&str> = page.texts().collect();

        assert_eq!(page.role, PageRole::Cover);
        assert!(texts.contains(&"TLS/SSL Scan Report"));
        assert!(texts.contains(&"Date: 2025-03-01 09:30:00"));
        assert!(texts.contains(&"Report ID: TLS-SEC-20250301-093000"));
        assert!(texts.contains(&"Scanner Used: Nmap (ssl-enum-ciphers)"));
        assert!(texts.contains(&"• Number of Targets Scanned: 3"));
        assert!(texts.contains(&"• Targets with Weak Ciphers: 2"));
        assert!(!texts.iter().any(|t| t.contains("Without Scan Output")));
    }

    #[test]
    fn test_severity_colors() {
        let page = render_cover(
            &ReportMetadata::default(),
            &stamp(),
            &ScanSummary::default(),
            &PageLayout::default(),
        );
        assert_eq!(color_of(&page, "• Targets with Strong"), Some(ColorRole::Positive));
        assert_eq!(color_of(&page, "• Targets with Weak"), Some(ColorRole::Alert));
        assert_eq!(color_of(&page, "• High-Risk"), Some(ColorRole::Alert));
        assert_eq!(color_of(&page, "• Medium-Risk"), Some(ColorRole::Warning));
    }

    #[test]
    fn test_unknown_targets_are_called_out() {
        let summary = ScanSummary { total: 1, weak: 1, unknown: 1, ..Default::default() };
        let page = render_cover(&ReportMetadata::default(), &stamp(), &summary, &PageLayout::default());
        assert_eq!(color_of(&page, "• Targets Without Scan Output: 1"), Some(ColorRole::Warning));
    }

    #[test]
    fn test_banners_span_page_width() {
        let page = render_cover(
            &ReportMetadata::default(),
            &stamp(),
            &ScanSummary::default(),
            &PageLayout::default(),
        );
        let bars: Vec<Bounds> = page
            .instructions
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Rect { bounds, paint: Paint::Fill, .. } => Some(*bounds),
                _ => None,
            })
            .collect();
        assert_eq!(bars, [Bounds::new(0, 0, 1000, 200), Bounds::new(0, 1250, 1000, 1400)]);
    }
}
