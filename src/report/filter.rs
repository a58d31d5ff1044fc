//! Hardware-only report filtering
//!
//! A full msinfo32 report goes on to enumerate drivers, services and the rest
//! of the software environment. Only the part before that marker is relevant
//! here, and the trimmed copy is kept on disk next to the summaries so it can
//! be consulted per machine later.

use crate::error::Result;
use crate::utils::encoding;
use std::fs;
use std::path::{Path, PathBuf};

const SOFTWARE_MARKER: &str = "[Software Environment]";

/// Truncate `text` right before the line that opens the software sections.
pub fn hardware_only(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if line.contains(SOFTWARE_MARKER) {
            break;
        }
        out.push_str(line);
    }
    out
}

/// Read a full report and persist its hardware-only half under
/// `hardware_dir`, returning the trimmed file's path.
pub fn write_hardware_only(report_path: &Path, hardware_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(hardware_dir)?;
    let document = encoding::read_utf16(report_path)?;
    let stem = report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let out_path = hardware_dir.join(format!("{}_hardware_report.txt", stem));
    encoding::write_utf16le(&out_path, &hardware_only(&document))?;
    Ok(out_path)
}
