// src/export/json.rs

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::info;

use crate::core::models::{ClassifiedResult, ScanSummary};
use crate::ui::ScanStamp;

/// Machine-readable companion to the PDF report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    #[serde(flatten)]
    pub stamp: &'a ScanStamp,
    pub summary: &'a ScanSummary,
    pub results: &'a [ClassifiedResult],
}

impl<'a> JsonReport<'a> {
    pub fn new(stamp: &'a ScanStamp, summary: &'a ScanSummary, results: &'a [ClassifiedResult]) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            stamp,
            summary,
            results,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .wrap_err_with(|| format!("Could not write JSON report to {}", path.display()))?;
        info!(path = %path.display(), "JSON report saved.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RiskTier, ScanOutput, Target, Verdict};
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_json_report_shape() {
        let stamp = ScanStamp { scan_date: "2025-01-01 00:00:00".to_string(), report_id: "R-1".to_string() };
        let results = vec![ClassifiedResult {
            target: Target::new("10.0.0.1"),
            verdict: Verdict::Weak,
            matched_lines: vec!["TLSv1.0 enabled".to_string()],
            tier: RiskTier::High,
            output: ScanOutput::Captured("TLSv1.0 enabled".to_string()),
        }];
        let summary = ScanSummary::from_results(&results);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        JsonReport::new(&stamp, &summary, &results).write(&path).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["report_id"], "R-1");
        assert_eq!(value["summary"]["weak"], 1);
        assert_eq!(value["summary"]["high"], 1);
        assert_eq!(value["results"][0]["target"], "10.0.0.1");
        assert_eq!(value["results"][0]["verdict"], "weak");
        assert_eq!(value["results"][0]["tier"], "high");
        assert_eq!(value["results"][0]["matched_lines"][0], "TLSv1.0 enabled");
        assert!(value["results"][0].get("output").is_none());
    }
}
