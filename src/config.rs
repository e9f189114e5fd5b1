// src/config.rs

//! Run configuration.
//!
//! Everything the pipeline treats as a constant (the indicator catalog, page
//! geometry, fonts, report wording, scanner invocation) lives here and is
//! handed to each component at construction time. Every field has a default,
//! so a config file only needs the keys it wants to change.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::knowledge_base::IndicatorCatalog;
use crate::export::fonts::FontSet;
use crate::logging::project_directory;
use crate::ui::layout::PageLayout;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub indicators: IndicatorCatalog,
    pub layout: PageLayout,
    pub fonts: FontSet,
    pub metadata: ReportMetadata,
    pub scanner: ScannerSettings,
    /// Image placed as the first page of the document, when present.
    pub cover_image: Option<PathBuf>,
}

/// Wording of the cover page metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetadata {
    pub title: String,
    pub footer: String,
    pub preparer: String,
    /// Assigned report identifier. When unset, one is derived from the scan time.
    pub report_id: Option<String>,
    pub scope: String,
    pub methodology: String,
    pub tool: String,
    pub recommended_action: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            title: "TLS/SSL Scan Report".to_string(),
            footer: "Confidential Security Report".to_string(),
            preparer: "Security Team".to_string(),
            report_id: None,
            scope: "External TLS/SSL Security Assessment".to_string(),
            methodology: "Automated & Manual Verification".to_string(),
            tool: "Nmap (ssl-enum-ciphers)".to_string(),
            recommended_action: "Immediate Mitigation Required".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerSettings {
    pub binary: String,
    /// Port scanned when a target does not name one.
    pub default_port: u16,
    /// Scans allowed in flight at once.
    pub concurrency: usize,
    pub timeout_secs: u64,
    /// Extra nmap flags, inserted before the host.
    pub extra_args: Vec<String>,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            binary: "nmap".to_string(),
            default_port: 443,
            concurrency: 4,
            timeout_secs: 300,
            extra_args: Vec::new(),
        }
    }
}

impl ReportConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, `config.json` in the user's
    /// config directory is used when present, else the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    debug!("No config file found, using defaults.");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Could not read config file {}", path.display()))?;
        let config = Self::from_json(&contents)
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), "Loaded configuration.");
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.indicators.indicators().is_empty() {
            return Err(eyre!("indicator catalog is empty"));
        }
        if let Some(index) = self.indicators.find_empty_marker() {
            return Err(eyre!("indicator #{index} has an empty marker"));
        }
        if self.scanner.timeout_secs == 0 {
            return Err(eyre!("scanner.timeout_secs must be positive"));
        }
        self.layout.validate()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge_base::IndicatorKind;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_yields_defaults() {
        assert_eq!(ReportConfig::from_json("{}").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = ReportConfig::from_json(
            r#"{ "metadata": { "preparer": "Blue Team" }, "scanner": { "concurrency": 1 } }"#,
        )
        .unwrap();

        assert_eq!(config.metadata.preparer, "Blue Team");
        assert_eq!(config.metadata.tool, "Nmap (ssl-enum-ciphers)");
        assert_eq!(config.scanner.concurrency, 1);
        assert_eq!(config.scanner.default_port, 443);
        assert_eq!(config.layout, PageLayout::default());
    }

    #[test]
    fn test_custom_catalog_is_loaded() {
        let config = ReportConfig::from_json(
            r#"{ "indicators": [ { "marker": "NULL", "kind": "broken_cipher" } ] }"#,
        )
        .unwrap();
        let indicators = config.indicators.indicators();
        assert_eq!(indicators.len(), 1);
        assert_eq!(indicators[0].kind, IndicatorKind::BrokenCipher);
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        let err = ReportConfig::from_json(r#"{ "indicators": [ { "marker": "", "kind": "block_mode" } ] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("empty marker"));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(ReportConfig::from_json(r#"{ "indicators": [] }"#).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = ReportConfig::from_json(r#"{ "scanner": { "timeout_secs": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("audit.json");
        fs::write(&path, r#"{ "cover_image": "/tmp/cover.png" }"#).unwrap();

        let config = ReportConfig::load(Some(&path)).unwrap();
        assert_eq!(config.cover_image, Some(PathBuf::from("/tmp/cover.png")));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(ReportConfig::load(Some(&dir.path().join("nope.json"))).is_err());
    }
}
