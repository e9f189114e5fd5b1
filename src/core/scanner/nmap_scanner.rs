// src/core/scanner/nmap_scanner.rs

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, error, info, warn};

use crate::config::ScannerSettings;
use crate::core::models::{ScanOutcome, Target};
use crate::core::scanner::ScanInvoker;

/// Runs `nmap --script ssl-enum-ciphers` against each target.
#[derive(Debug, Clone)]
pub struct NmapInvoker {
    settings: ScannerSettings,
}

impl NmapInvoker {
    pub fn new(settings: ScannerSettings) -> Self {
        Self { settings }
    }

    /// Command-line arguments for one target. The target's own port wins over
    /// the configured default.
    pub fn arguments(&self, target: &Target) -> Vec<String> {
        let port = target.port().unwrap_or(self.settings.default_port);
        let mut args = vec![
            "-sV".to_string(),
            "--script".to_string(),
            "ssl-enum-ciphers".to_string(),
            "-p".to_string(),
            port.to_string(),
        ];
        if target.host().contains(':') {
            args.push("-6".to_string());
        }
        args.extend(self.settings.extra_args.iter().cloned());
        args.push(target.host().to_string());
        args
    }

    async fn run(&self, target: &Target) -> Result<String, String> {
        let args = self.arguments(target);
        debug!(%target, binary = %self.settings.binary, ?args, "Spawning scanner process.");

        let child = Command::new(&self.settings.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let timeout = Duration::from_secs(self.settings.timeout_secs);
        let output = tokio::time::timeout(timeout, child)
            .await
            .map_err(|_| {
                warn!(%target, timeout_secs = self.settings.timeout_secs, "Scanner timed out.");
                format!("Scan timed out after {}s.", self.settings.timeout_secs)
            })?
            .map_err(|e| {
                error!(%target, error = %e, "Failed to run scanner");
                format!("Could not run {}: {}", self.settings.binary, e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(%target, status = %output.status, stderr = %stderr.trim(), "Scanner exited with failure status.");
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() {
            return Err("No output or scan failed.".to_string());
        }
        Ok(stdout)
    }
}

impl ScanInvoker for NmapInvoker {
    async fn scan(&self, target: &Target) -> ScanOutcome {
        match self.run(target).await {
            Ok(stdout) => {
                info!(%target, bytes = stdout.len(), "Scan finished.");
                ScanOutcome::captured(target.clone(), stdout)
            }
            Err(reason) => ScanOutcome::failed(target.clone(), reason),
        }
    }
}
