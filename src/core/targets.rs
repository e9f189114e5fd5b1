// src/core/targets.rs

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{debug, info};

use crate::core::models::Target;

/// Parses a target list: one target per line, whitespace trimmed, blank lines
/// and `#` comments skipped. Order and duplicates are preserved.
pub fn parse_targets(contents: &str) -> Vec<Target> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Target::new)
        .collect()
}

/// Reads the target list from disk.
///
/// A missing, unreadable or empty file is fatal: nothing is scanned and no
/// report is written.
pub fn load_targets(path: &Path) -> Result<Vec<Target>> {
    if !path.exists() {
        return Err(eyre!("Target list {} not found", path.display()));
    }
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("Could not read target list {}", path.display()))?;

    let targets = parse_targets(&contents);
    if targets.is_empty() {
        return Err(eyre!("No valid targets found in {}", path.display()));
    }

    debug!(?targets, "Parsed target list.");
    info!(count = targets.len(), path = %path.display(), "Loaded targets.");
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let targets = parse_targets("  example.com \n\n# staging\n10.0.0.1:8443\r\nexample.com\n");
        let names: Vec<&str> = targets.iter().map(Target::as_str).collect();
        assert_eq!(names, ["example.com", "10.0.0.1:8443", "example.com"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = load_targets(&dir.path().join("targets.txt")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_file_without_targets_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("targets.txt");
        fs::write(&path, "\n   \n# only comments\n").unwrap();

        let err = load_targets(&path).unwrap_err();
        assert!(err.to_string().contains("No valid targets"));
    }

    #[test]
    fn test_load_reads_targets_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("targets.txt");
        fs::write(&path, "b.example\na.example\n").unwrap();

        let targets = load_targets(&path).unwrap();
        assert_eq!(targets, vec![Target::new("b.example"), Target::new("a.example")]);
    }
}
