//! Plain-text summary artifact

use crate::data::record::FIELD_NAMES;
use crate::data::HardwareRecord;
use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append one `name: value` line per field, then a blank separator line.
/// The whole block is built up front so the file sees a single write.
pub fn append_block(path: &Path, record: &HardwareRecord) -> Result<()> {
    let mut block = String::new();
    for (name, value) in FIELD_NAMES.iter().zip(record.field_values()) {
        block.push_str(name);
        block.push_str(": ");
        block.push_str(&value);
        block.push('\n');
    }
    block.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");

        let record = HardwareRecord {
            system_name: "PC01".to_string(),
            disk_sizes: vec!["500GB".to_string(), "1TB".to_string()],
            ..Default::default()
        };
        append_block(&path, &record).unwrap();
        append_block(&path, &record).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("System Name: PC01\n").count(), 2);
        assert_eq!(contents.matches("Disk Size: 500GB, 1TB\n").count(), 2);
        assert_eq!(contents.matches("\n\n").count(), 2);
    }

    #[test]
    fn every_field_gets_a_line_even_when_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        append_block(&path, &HardwareRecord::default()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        for name in FIELD_NAMES {
            assert!(contents.contains(&format!("{}: \n", name)));
        }
    }
}
