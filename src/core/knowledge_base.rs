//! The catalog of weak-configuration markers and the matcher built on it.
//!
//! Scanner output is free text, so classification is plain substring
//! matching against a small, ordered list of markers. The list is data, passed
//! in through configuration, so it can be swapped in tests or replaced by a
//! structured cipher-suite parser without touching the classifier or the
//! report compositor.

use crate::core::models::RiskTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a marker denotes. Each kind carries a fixed risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Deprecated protocol versions (SSLv2/SSLv3, TLS 1.0/1.1).
    LegacyProtocol,
    /// Export/low/medium strength tags emitted by the scanner.
    CipherStrength,
    /// Block-cipher mode with a history of padding-oracle attacks.
    BlockMode,
    /// Stream cipher with practical plaintext-recovery attacks.
    BrokenCipher,
    /// 64-bit block ciphers (SWEET32).
    LegacyCipher,
}

impl IndicatorKind {
    pub fn tier(self) -> RiskTier {
        match self {
            IndicatorKind::LegacyProtocol | IndicatorKind::BrokenCipher => RiskTier::High,
            IndicatorKind::BlockMode => RiskTier::Medium,
            IndicatorKind::CipherStrength | IndicatorKind::LegacyCipher => RiskTier::Low,
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::LegacyProtocol => write!(f, "Legacy protocol version"),
            IndicatorKind::CipherStrength => write!(f, "Weak cipher strength"),
            IndicatorKind::BlockMode => write!(f, "CBC block mode"),
            IndicatorKind::BrokenCipher => write!(f, "Broken stream cipher"),
            IndicatorKind::LegacyCipher => write!(f, "Legacy block cipher"),
        }
    }
}

/// One marker: a case-sensitive substring and what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub marker: String,
    pub kind: IndicatorKind,
}

impl Indicator {
    pub fn new(marker: &str, kind: IndicatorKind) -> Self {
        Self { marker: marker.to_string(), kind }
    }
}

/// Ordered list of indicators. Order never changes whether a line matches,
/// but it fixes the order `IndicatorMatcher::matches` reports them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorCatalog(Vec<Indicator>);

impl IndicatorCatalog {
    pub fn new(indicators: Vec<Indicator>) -> Self {
        Self(indicators)
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.0
    }

    /// Returns the first indicator whose marker is empty, if any. An empty
    /// marker would match every line of output.
    pub fn find_empty_marker(&self) -> Option<usize> {
        self.0.iter().position(|i| i.marker.is_empty())
    }
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        use IndicatorKind::*;
        Self::new(vec![
            Indicator::new("SSLv2", LegacyProtocol),
            Indicator::new("SSLv3", LegacyProtocol),
            Indicator::new("TLSv1.0", LegacyProtocol),
            Indicator::new("TLSv1.1", LegacyProtocol),
            Indicator::new("EXP", CipherStrength),
            Indicator::new("LOW", CipherStrength),
            Indicator::new("MEDIUM", CipherStrength),
            Indicator::new("CBC", BlockMode),
            Indicator::new("RC4", BrokenCipher),
            Indicator::new("3DES", LegacyCipher),
        ])
    }
}

/// Stateless line tester over a catalog.
#[derive(Debug, Clone)]
pub struct IndicatorMatcher {
    catalog: IndicatorCatalog,
}

impl IndicatorMatcher {
    pub fn new(catalog: IndicatorCatalog) -> Self {
        Self { catalog }
    }

    /// True iff the line contains at least one marker.
    pub fn is_weak(&self, line: &str) -> bool {
        self.catalog.0.iter().any(|i| line.contains(i.marker.as_str()))
    }

    /// Every indicator found in the line, in catalog order.
    pub fn matches<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a Indicator> + 'a {
        self.catalog.0.iter().filter(move |i| line.contains(i.marker.as_str()))
    }
}
