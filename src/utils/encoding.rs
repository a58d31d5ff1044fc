//! UTF-16 file helpers
//!
//! msinfo32 writes its reports as UTF-16 with a byte-order mark. The trimmed
//! hardware-only copies keep that encoding so the original viewer still opens
//! them.

use crate::error::{HwReportError, Result};
use std::fs;
use std::path::Path;

const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Read a UTF-16 file, sniffing byte order from the BOM. Little endian is
/// assumed when no BOM is present, matching what msinfo32 emits.
pub fn read_utf16<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path)?;
    decode_utf16(&bytes)
}

/// Decode raw UTF-16 bytes into a `String`.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (big_endian, payload) = if bytes.starts_with(&BOM_BE) {
        (true, &bytes[2..])
    } else if bytes.starts_with(&BOM_LE) {
        (false, &bytes[2..])
    } else {
        (false, bytes)
    };

    if payload.len() % 2 != 0 {
        return Err(HwReportError::Encoding(format!(
            "UTF-16 input has odd byte length {}",
            bytes.len()
        )));
    }

    let mut units = Vec::with_capacity(payload.len() / 2);
    for pair in payload.chunks_exact(2) {
        units.push(if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        });
    }

    String::from_utf16(&units)
        .map_err(|_| HwReportError::Encoding("invalid UTF-16 code units".to_string()))
}

/// Write `text` as UTF-16LE with a BOM.
pub fn write_utf16le<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
    bytes.extend_from_slice(&BOM_LE);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_cyrillic_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let text = "[Сведения о системе]\r\nИмя системы WS-042\r\n";
        write_utf16le(&path, text).unwrap();
        assert_eq!(read_utf16(&path).unwrap(), text);
    }

    #[test]
    fn decodes_big_endian_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "abc".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_utf16(&bytes).unwrap(), "abc");
    }

    #[test]
    fn decodes_bomless_input_as_little_endian() {
        let mut bytes = Vec::new();
        for unit in "[Disks]".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_utf16(&bytes).unwrap(), "[Disks]");
    }

    #[test]
    fn odd_length_input_is_an_error() {
        assert!(decode_utf16(&[0xFF, 0xFE, 0x41]).is_err());
    }
}
