//! CSV summary artifact

use crate::data::record::FIELD_NAMES;
use crate::data::HardwareRecord;
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;

/// Append one record as a CSV row, emitting the header row first when the
/// file is new or empty. Append mode keeps rows from earlier machines in
/// the same run intact.
pub fn append_row(path: &Path, record: &HardwareRecord) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let fresh = file.metadata()?.len() == 0;

    let mut writer = csv::Writer::from_writer(file);
    if fresh {
        writer.write_record(FIELD_NAMES)?;
    }
    writer.write_record(record.field_values())?;
    writer.flush()?;
    Ok(())
}
