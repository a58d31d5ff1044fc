//! Target probing and report generation
//!
//! Thin wrappers around the external tools the collector leans on: `ping`
//! for reachability, `msinfo32` for the report itself, `hostname` for
//! localhost-only runs.

use crate::error::{HwReportError, Result};
use std::path::Path;
use std::process::Command;

/// True when `host` answers pings. Probe failures of any kind (command
/// missing, timeout) read as unreachable.
pub fn is_reachable(host: &str, echo_count: u32, timeout_ms: u64) -> bool {
    let count = echo_count.to_string();
    let mut command = Command::new("ping");
    if cfg!(windows) {
        let timeout = timeout_ms.to_string();
        command.args(["-n", count.as_str(), "-w", timeout.as_str()]);
    } else {
        // unix ping takes its deadline in whole seconds
        let timeout = (timeout_ms / 1000).max(1).to_string();
        command.args(["-c", count.as_str(), "-W", timeout.as_str()]);
    }
    command
        .arg(host)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Generate a full msinfo32 report for `computer` at `report_path`.
/// Blocks until msinfo32 finishes writing, which can take minutes per
/// machine.
pub fn create_report(computer: &str, report_path: &Path) -> Result<()> {
    let status = Command::new("cmd")
        .args(["/c", "msinfo32", "/computer", computer, "/report"])
        .arg(report_path)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(HwReportError::Probe(format!(
            "msinfo32 exited with {:?} for {}",
            status.code(),
            computer
        )))
    }
}

/// The local machine's hostname, for localhost-only runs.
pub fn localhost_name() -> Result<String> {
    let output = Command::new("hostname").output()?;
    if !output.status.success() {
        return Err(HwReportError::Probe(format!(
            "hostname failed with exit code: {:?}",
            output.status.code()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
