// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

// --- Targets ---

/// A scanned network endpoint, as read from the target list.
///
/// The identifier is kept verbatim so the report shows exactly what the
/// operator wrote; `host()` and `port()` split off an optional port suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The host part, with IPv6 brackets removed (`[::1]:8443` -> `::1`).
    pub fn host(&self) -> &str {
        match self.split_port() {
            Some((host, _)) => host.trim_start_matches('[').trim_end_matches(']'),
            None => self.0.trim_start_matches('[').trim_end_matches(']'),
        }
    }

    /// The explicit port, if the identifier carries one.
    pub fn port(&self) -> Option<u16> {
        self.split_port().map(|(_, port)| port)
    }

    fn split_port(&self) -> Option<(&str, u16)> {
        let (host, port) = self.0.rsplit_once(':')?;
        // A bare IPv6 address has colons but no port.
        if host.contains(':') && !(host.starts_with('[') && host.ends_with(']')) {
            return None;
        }
        port.parse().ok().map(|p| (host, p))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Scan outcomes ---

/// Raw result of invoking the scanner for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ScanOutput {
    /// Whatever the scanner printed on stdout.
    Captured(String),
    /// The scan produced no usable output; carries a human-readable reason.
    Failed(String),
}

impl ScanOutput {
    /// The captured text, unless the scan failed or printed only whitespace.
    pub fn usable_text(&self) -> Option<&str> {
        match self {
            ScanOutput::Captured(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub target: Target,
    pub output: ScanOutput,
}

impl ScanOutcome {
    pub fn captured(target: Target, text: impl Into<String>) -> Self {
        Self { target, output: ScanOutput::Captured(text.into()) }
    }

    pub fn failed(target: Target, reason: impl Into<String>) -> Self {
        Self { target, output: ScanOutput::Failed(reason.into()) }
    }
}

// --- Classification ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Strong,
    Weak,
    /// No scan data to judge; never reported as a clean configuration.
    Unknown,
}

/// Severity attached to a verdict. Ordered so the worst tier compares greatest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    #[default]
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedResult {
    pub target: Target,
    pub verdict: Verdict,
    /// Lines of raw output that matched a weak indicator, in original order.
    pub matched_lines: Vec<String>,
    pub tier: RiskTier,
    #[serde(skip)]
    pub output: ScanOutput,
}

impl ClassifiedResult {
    /// Text to show on the detail page: the raw output or the failure reason.
    pub fn display_text(&self) -> &str {
        match &self.output {
            ScanOutput::Failed(reason) => reason,
            captured => captured.usable_text().unwrap_or("No output or scan failed."),
        }
    }
}

// --- Summary ---

/// Aggregate counts over one run.
///
/// `weak` counts every target that could not be confirmed strong, so
/// `strong + weak == total` holds for any input; `unknown` is the subset of
/// `weak` that had no scan data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub strong: usize,
    pub weak: usize,
    pub unknown: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ScanSummary {
    pub fn from_results(results: &[ClassifiedResult]) -> Self {
        let mut summary = Self { total: results.len(), ..Default::default() };
        for result in results {
            match result.verdict {
                Verdict::Strong => summary.strong += 1,
                Verdict::Weak => summary.weak += 1,
                Verdict::Unknown => {
                    summary.weak += 1;
                    summary.unknown += 1;
                }
            }
            match result.tier {
                RiskTier::High => summary.high += 1,
                RiskTier::Medium => summary.medium += 1,
                RiskTier::Low => summary.low += 1,
                RiskTier::None => {}
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(verdict: Verdict, tier: RiskTier) -> ClassifiedResult {
        ClassifiedResult {
            target: Target::new("host"),
            verdict,
            matched_lines: Vec::new(),
            tier,
            output: ScanOutput::Captured(String::new()),
        }
    }

    #[test]
    fn test_target_port_parsing() {
        assert_eq!(Target::new("example.com").port(), None);
        assert_eq!(Target::new("example.com").host(), "example.com");
        assert_eq!(Target::new("10.0.0.1:8443").port(), Some(8443));
        assert_eq!(Target::new("10.0.0.1:8443").host(), "10.0.0.1");
        assert_eq!(Target::new("[::1]:993").port(), Some(993));
        assert_eq!(Target::new("[::1]:993").host(), "::1");
        assert_eq!(Target::new("fe80::1").port(), None);
        assert_eq!(Target::new("fe80::1").host(), "fe80::1");
        assert_eq!(Target::new("host:notaport").port(), None);
    }

    #[test]
    fn test_summary_of_empty_set_is_all_zero() {
        assert_eq!(ScanSummary::from_results(&[]), ScanSummary::default());
    }

    #[test]
    fn test_summary_counts_partition_total() {
        let results = vec![
            result(Verdict::Strong, RiskTier::None),
            result(Verdict::Weak, RiskTier::High),
            result(Verdict::Weak, RiskTier::Medium),
            result(Verdict::Weak, RiskTier::Low),
            result(Verdict::Unknown, RiskTier::None),
        ];
        let summary = ScanSummary::from_results(&results);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.strong, 1);
        assert_eq!(summary.weak, 4);
        assert_eq!(summary.unknown, 1);
        assert_eq!((summary.high, summary.medium, summary.low), (1, 1, 1));
        assert_eq!(summary.strong + summary.weak, summary.total);
    }

    #[test]
    fn test_display_text_falls_back_for_blank_output() {
        let mut r = result(Verdict::Unknown, RiskTier::None);
        assert_eq!(r.display_text(), "No output or scan failed.");
        r.output = ScanOutput::Failed("nmap timed out after 5s".to_string());
        assert_eq!(r.display_text(), "nmap timed out after 5s");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::High > RiskTier::Medium);
        assert!(RiskTier::Medium > RiskTier::Low);
        assert!(RiskTier::Low > RiskTier::None);
        assert_eq!(RiskTier::High.to_string(), "High");
    }
}
