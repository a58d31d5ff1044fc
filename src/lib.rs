//! hwreport library
//!
//! Collects msinfo32 system-information reports and rolls the hardware
//! fields up into per-run summary files.

pub mod config;
pub mod data;
pub mod error;
pub mod probe;
pub mod report;
pub mod roster;
pub mod summary;
pub mod utils;

pub use data::HardwareRecord;
pub use error::{HwReportError, Result};

use std::path::Path;
use summary::SummaryWriter;

/// Run the post-acquisition pipeline for one machine: strip the report down
/// to its hardware sections, parse it, and append the record to both
/// summary artifacts.
pub fn summarize_report(
    report_path: &Path,
    hardware_dir: &Path,
    writer: &SummaryWriter,
) -> Result<HardwareRecord> {
    let trimmed_path = report::filter::write_hardware_only(report_path, hardware_dir)?;
    let document = utils::encoding::read_utf16(&trimmed_path)?;
    let record = report::parse(&document);
    writer.append_table_row(&record)?;
    writer.append_text_block(&record)?;
    Ok(record)
}
