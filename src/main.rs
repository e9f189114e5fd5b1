// src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use color_eyre::eyre::Result;
use tracing::info;

mod app;
mod config;
mod core;
mod export;
mod logging;
mod ui;

use crate::app::AuditRequest;
use crate::config::ReportConfig;
use crate::core::models::Verdict;
use crate::core::scanner::nmap_scanner::NmapInvoker;

/// Scans TLS endpoints for weak protocols and ciphers and writes a PDF report.
#[derive(Debug, Parser)]
#[command(name = "cipher-audit", version, about)]
struct Cli {
    /// File with one target (host or host:port) per line
    targets: PathBuf,

    /// Path of the PDF report
    #[arg(short, long, default_value = "ssl_scan_report.pdf")]
    output: PathBuf,

    /// JSON configuration file
    #[arg(short, long, env = "CIPHER_AUDIT_CONFIG")]
    config: Option<PathBuf>,

    /// Image used as the first page of the report
    #[arg(long)]
    cover_image: Option<PathBuf>,

    /// Also write the classified results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Report identifier printed on the cover page
    #[arg(long)]
    report_id: Option<String>,

    /// Name printed as the report preparer
    #[arg(long)]
    preparer: Option<String>,

    /// Number of scans run at once
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Console verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command line values take precedence over the config file.
    fn apply_overrides(&self, config: &mut ReportConfig) {
        if let Some(path) = &self.cover_image {
            config.cover_image = Some(path.clone());
        }
        if let Some(id) = &self.report_id {
            config.metadata.report_id = Some(id.clone());
        }
        if let Some(name) = &self.preparer {
            config.metadata.preparer = name.clone();
        }
        if let Some(n) = self.concurrency {
            config.scanner.concurrency = n;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::initialize_logging(cli.verbose)?;

    let mut config = ReportConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let request = AuditRequest {
        targets_file: cli.targets.clone(),
        output: cli.output.clone(),
        json_output: cli.json.clone(),
    };
    let invoker = Arc::new(NmapInvoker::new(config.scanner.clone()));
    let outcome = app::run_audit(&config, invoker, &request).await?;

    for result in outcome.results.iter().filter(|r| r.verdict != Verdict::Strong) {
        info!(target = %result.target, verdict = %result.verdict, tier = %result.tier, "Target needs attention.");
    }
    info!(
        pages = outcome.page_count,
        report_id = %outcome.stamp.report_id,
        weak = outcome.summary.weak,
        high = outcome.summary.high,
        medium = outcome.summary.medium,
        "Report written."
    );
    println!(
        "Scanning completed on {}! Report saved as {}",
        outcome.stamp.scan_date,
        outcome.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cipher-audit", "targets.txt"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("ssl_scan_report.pdf"));
        assert_eq!(cli.verbose, 0);
        assert!(cli.json.is_none());
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "cipher-audit",
            "targets.txt",
            "--preparer",
            "Blue Team",
            "--report-id",
            "TLS-SEC-7",
            "-j",
            "8",
            "-vv",
        ])
        .unwrap();
        let mut config = ReportConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.metadata.preparer, "Blue Team");
        assert_eq!(config.metadata.report_id.as_deref(), Some("TLS-SEC-7"));
        assert_eq!(config.scanner.concurrency, 8);
        assert_eq!(cli.verbose, 2);
        assert_eq!(config.metadata.title, "TLS/SSL Scan Report");
    }
}
