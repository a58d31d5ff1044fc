//! Per-run summary artifacts
//!
//! Every invocation gets its own pair of summary files, keyed by a run id
//! computed once at startup and threaded through explicitly. Both files are
//! append-only: one row (or text block) lands per successfully parsed
//! machine, in processing order.

pub mod table;
pub mod text;

use crate::data::HardwareRecord;
use crate::error::Result;
use chrono::Local;
use std::path::PathBuf;

const RUN_ID_FORMAT: &str = "%H_%M_%S-%d_%m_%y";

/// Run id for artifact filenames, e.g. `14_03_59-30_08_26`.
pub fn run_id() -> String {
    Local::now().format(RUN_ID_FORMAT).to_string()
}

/// Owns the summary directory and run id for one invocation and appends
/// records to both artifacts.
#[derive(Debug)]
pub struct SummaryWriter {
    summary_dir: PathBuf,
    run_id: String,
}

impl SummaryWriter {
    pub fn new(summary_dir: PathBuf, run_id: String) -> Self {
        SummaryWriter { summary_dir, run_id }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.summary_dir.join(format!("summary-{}.csv", self.run_id))
    }

    pub fn txt_path(&self) -> PathBuf {
        self.summary_dir.join(format!("summary-{}.txt", self.run_id))
    }

    /// Append one record as a CSV row; the header row is written first when
    /// the artifact is still empty.
    pub fn append_table_row(&self, record: &HardwareRecord) -> Result<()> {
        std::fs::create_dir_all(&self.summary_dir)?;
        table::append_row(&self.csv_path(), record)
    }

    /// Append one `name: value` block for the record, followed by a blank
    /// separator line.
    pub fn append_text_block(&self, record: &HardwareRecord) -> Result<()> {
        std::fs::create_dir_all(&self.summary_dir)?;
        text::append_block(&self.txt_path(), record)
    }
}
