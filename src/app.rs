// src/app.rs

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::core::classifier::ResultClassifier;
use crate::core::knowledge_base::IndicatorMatcher;
use crate::core::models::{ClassifiedResult, ScanSummary};
use crate::core::scanner::{ScanInvoker, scan_all};
use crate::core::targets::load_targets;
use crate::export::DocumentSink;
use crate::export::assets::load_cover_image;
use crate::export::json::JsonReport;
use crate::export::pdf::PdfExporter;
use crate::ui::canvas::ReportPage;
use crate::ui::{ReportCompositor, ScanStamp};

/// Where a run reads its targets and writes its artifacts.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub targets_file: PathBuf,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct AuditOutcome {
    pub stamp: ScanStamp,
    pub summary: ScanSummary,
    pub results: Vec<ClassifiedResult>,
    pub page_count: usize,
    pub output: PathBuf,
}

// --- Pipeline ---

/// Runs the whole audit: targets, scans, classification, composition, export.
///
/// An unreadable or empty target list aborts before any scan is started and
/// nothing is written. Per-target scan failures never abort the run.
///
/// # Arguments
///
/// * `config` - The loaded run configuration.
/// * `invoker` - Produces raw scanner output for each target.
/// * `request` - Input and output paths.
///
/// # Returns
///
/// The stamp, summary and classified results of the written report.
pub async fn run_audit<I: ScanInvoker>(
    config: &ReportConfig,
    invoker: Arc<I>,
    request: &AuditRequest,
) -> Result<AuditOutcome> {
    let targets = load_targets(&request.targets_file)?;
    let stamp = scan_stamp(Local::now(), config.metadata.report_id.as_deref());
    info!(targets = targets.len(), report_id = %stamp.report_id, "Starting audit.");

    let outcomes = scan_all(invoker, &targets, config.scanner.concurrency).await;

    let classifier = ResultClassifier::new(IndicatorMatcher::new(config.indicators.clone()));
    let results = classifier.classify_all(outcomes);
    let summary = ScanSummary::from_results(&results);
    info!(
        total = summary.total,
        strong = summary.strong,
        weak = summary.weak,
        unknown = summary.unknown,
        "Classification finished."
    );
    if summary.unknown > 0 {
        warn!(unknown = summary.unknown, "Some targets produced no usable scan output.");
    }

    let pages = compose_pages(config, classifier.matcher(), &results, &summary, &stamp);
    let cover = config.cover_image.as_deref().and_then(|path| {
        load_cover_image(path, config.layout.cover_image_width, config.layout.cover_image_height)
    });

    let exporter = PdfExporter::new(&config.fonts, &config.layout);
    exporter.export(&pages, cover.as_ref(), &request.output)?;

    if let Some(json_path) = &request.json_output {
        JsonReport::new(&stamp, &summary, &results).write(json_path)?;
    }

    Ok(AuditOutcome {
        stamp,
        summary,
        results,
        page_count: pages.len() + usize::from(cover.is_some()),
        output: request.output.clone(),
    })
}

/// Lays out the report pages. Pure: no clock, no filesystem.
pub fn compose_pages(
    config: &ReportConfig,
    matcher: &IndicatorMatcher,
    results: &[ClassifiedResult],
    summary: &ScanSummary,
    stamp: &ScanStamp,
) -> Vec<ReportPage> {
    let compositor = ReportCompositor::new(config.layout.clone(), config.metadata.clone(), matcher.clone());
    compositor.compose(results, summary, stamp)
}

/// Formats the scan date and picks the report ID, deriving one from `now`
/// when none was assigned.
pub fn scan_stamp(now: DateTime<Local>, report_id: Option<&str>) -> ScanStamp {
    ScanStamp {
        scan_date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        report_id: match report_id {
            Some(id) => id.to_string(),
            None => now.format("TLS-SEC-%Y%m%d-%H%M%S").to_string(),
        },
    }
}
