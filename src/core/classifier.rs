// src/core/classifier.rs

use tracing::debug;

use crate::core::knowledge_base::IndicatorMatcher;
use crate::core::models::{ClassifiedResult, RiskTier, ScanOutcome, Verdict};

/// Turns raw scanner output into a verdict and risk tier.
///
/// Classification is total: every outcome yields exactly one result and
/// malformed or empty output is a valid input, never an error.
#[derive(Debug, Clone)]
pub struct ResultClassifier {
    matcher: IndicatorMatcher,
}

impl ResultClassifier {
    pub fn new(matcher: IndicatorMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &IndicatorMatcher {
        &self.matcher
    }

    /// Classifies every outcome, preserving input order.
    pub fn classify_all(&self, outcomes: Vec<ScanOutcome>) -> Vec<ClassifiedResult> {
        outcomes.into_iter().map(|o| self.classify(o)).collect()
    }

    pub fn classify(&self, outcome: ScanOutcome) -> ClassifiedResult {
        let ScanOutcome { target, output } = outcome;

        let matched_lines: Vec<String> = match output.usable_text() {
            Some(text) => text
                .lines()
                .filter(|line| self.matcher.is_weak(line))
                .map(str::to_string)
                .collect(),
            None => {
                debug!(%target, "No usable scan output, classifying as unknown.");
                return ClassifiedResult {
                    target,
                    verdict: Verdict::Unknown,
                    matched_lines: Vec::new(),
                    tier: RiskTier::None,
                    output,
                };
            }
        };

        let (verdict, tier) = if matched_lines.is_empty() {
            (Verdict::Strong, RiskTier::None)
        } else {
            for indicator in matched_lines.iter().flat_map(|line| self.matcher.matches(line)) {
                debug!(%target, marker = %indicator.marker, kind = %indicator.kind, "Weak indicator matched.");
            }
            (Verdict::Weak, self.risk_tier(&matched_lines))
        };

        debug!(%target, %verdict, %tier, matched = matched_lines.len(), "Classified target.");
        ClassifiedResult { target, verdict, matched_lines, tier, output }
    }

    /// Worst tier over every indicator found in the matched lines. Any weak
    /// result is at least `Low`.
    fn risk_tier(&self, matched_lines: &[String]) -> RiskTier {
        matched_lines
            .iter()
            .flat_map(|line| self.matcher.matches(line))
            .map(|indicator| indicator.kind.tier())
            .fold(RiskTier::Low, RiskTier::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge_base::IndicatorCatalog;
    use crate::core::models::Target;

    fn classifier() -> ResultClassifier {
        ResultClassifier::new(IndicatorMatcher::new(IndicatorCatalog::default()))
    }

    fn classify(target: &str, text: &str) -> ClassifiedResult {
        classifier().classify(ScanOutcome::captured(Target::new(target), text))
    }

    #[test]
    fn test_legacy_protocol_is_high_risk() {
        let r = classify("10.0.0.1", "TLSv1.0 enabled\nAES256-GCM strong");
        assert_eq!(r.target.as_str(), "10.0.0.1");
        assert_eq!(r.verdict, Verdict::Weak);
        assert_eq!(r.matched_lines, vec!["TLSv1.0 enabled".to_string()]);
        assert_eq!(r.tier, RiskTier::High);
    }

    #[test]
    fn test_modern_suite_is_strong() {
        let r = classify("10.0.0.2", "TLS_AES_256_GCM_SHA384 preferred");
        assert_eq!(r.verdict, Verdict::Strong);
        assert!(r.matched_lines.is_empty());
        assert_eq!(r.tier, RiskTier::None);
    }

    #[test]
    fn test_matched_lines_keep_input_order() {
        let text = "Starting Nmap\n| CBC first\nclean line\n| RC4 second\n|   TLSv1.2:\n| 3DES third";
        let r = classify("host", text);
        assert_eq!(r.matched_lines, ["| CBC first", "| RC4 second", "| 3DES third"]);
    }

    #[test]
    fn test_rc4_is_high_risk() {
        assert_eq!(classify("h", "TLS_RSA_WITH_RC4_128_SHA").tier, RiskTier::High);
    }

    #[test]
    fn test_cbc_without_legacy_markers_is_medium() {
        let r = classify("h", "TLSv1.2:\n  TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256");
        assert_eq!(r.verdict, Verdict::Weak);
        assert_eq!(r.tier, RiskTier::Medium);
    }

    #[test]
    fn test_other_weak_markers_default_to_low() {
        assert_eq!(classify("h", "cipher strength: MEDIUM").tier, RiskTier::Low);
        assert_eq!(classify("h", "EXPORT grade cipher").tier, RiskTier::Low);
    }

    #[test]
    fn test_high_wins_over_medium() {
        let r = classify("h", "TLS_RSA_WITH_AES_128_CBC_SHA\nSSLv3 offered");
        assert_eq!(r.tier, RiskTier::High);
    }

    #[test]
    fn test_failed_or_blank_output_is_unknown() {
        let c = classifier();
        let failed = c.classify(ScanOutcome::failed(Target::new("a"), "nmap exited"));
        let blank = c.classify(ScanOutcome::captured(Target::new("b"), "  \n\n"));

        for r in [failed, blank] {
            assert_eq!(r.verdict, Verdict::Unknown);
            assert!(r.matched_lines.is_empty());
            assert_eq!(r.tier, RiskTier::None);
        }
    }

    #[test]
    fn test_crlf_output_is_split_cleanly() {
        let r = classify("h", "SSLv3\r\nTLSv1.3\r\n");
        assert_eq!(r.matched_lines, ["SSLv3"]);
    }

    #[test]
    fn test_classify_all_is_ordered_and_idempotent() {
        let outcomes = vec![
            ScanOutcome::captured(Target::new("b"), "RC4"),
            ScanOutcome::captured(Target::new("a"), "TLSv1.3"),
            ScanOutcome::failed(Target::new("c"), "down"),
        ];
        let c = classifier();
        let first = c.classify_all(outcomes.clone());
        let second = c.classify_all(outcomes);

        let targets: Vec<&str> = first.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, ["b", "a", "c"]);
        assert_eq!(first, second);
    }
}
