// src/ui/mod.rs

//! Report composition: classified results in, ordered pages of draw
//! instructions out. Nothing here touches the filesystem or the clock.

use serde::Serialize;

use crate::config::ReportMetadata;
use crate::core::knowledge_base::IndicatorMatcher;
use crate::core::models::{ClassifiedResult, ScanSummary};

pub mod canvas;
pub mod layout;
mod widgets;

use self::canvas::ReportPage;
use self::layout::PageLayout;

/// Per-run values printed on the cover page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanStamp {
    pub scan_date: String,
    pub report_id: String,
}

#[derive(Debug, Clone)]
pub struct ReportCompositor {
    layout: PageLayout,
    metadata: ReportMetadata,
    matcher: IndicatorMatcher,
}

impl ReportCompositor {
    pub fn new(layout: PageLayout, metadata: ReportMetadata, matcher: IndicatorMatcher) -> Self {
        Self { layout, metadata, matcher }
    }

    /// Builds the full page sequence: cover, summary (plus continuation
    /// pages), then one detail page per result in input order.
    ///
    /// The output depends only on the arguments, so equal inputs give equal
    /// pages.
    pub fn compose(
        &self,
        results: &[ClassifiedResult],
        summary: &ScanSummary,
        stamp: &ScanStamp,
    ) -> Vec<ReportPage> {
        let mut pages = vec![widgets::cover::render_cover(&self.metadata, stamp, summary, &self.layout)];
        pages.extend(widgets::summary::render_summary(results, &self.layout));
        pages.extend(
            results
                .iter()
                .map(|result| widgets::results::render_detail(result, &self.matcher, &self.layout)),
        );
        pages
    }
}
