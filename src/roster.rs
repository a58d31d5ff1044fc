//! Target roster handling
//!
//! The roster is a plain UTF-8 text file with one computer name (or address)
//! per line. Names get sanitized on load so stray punctuation or whitespace
//! in the file never reaches ping or msinfo32.

use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref NON_NAME_CHARS: Regex = Regex::new(r"[^\w\-]+").unwrap();
}

/// Strip everything that cannot be part of a host name.
pub fn sanitize_name(raw: &str) -> String {
    NON_NAME_CHARS.replace_all(raw, "").to_string()
}

/// Read the roster, dropping entries that are empty after sanitization.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(sanitize_name)
        .filter(|name| !name.is_empty())
        .collect())
}

/// Create a template roster for the user to fill in.
pub fn seed(path: &Path) -> Result<()> {
    fs::write(path, "computer-1\ncomputer-2\ncomputer-3\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitization_keeps_word_chars_and_dashes() {
        assert_eq!(sanitize_name(" WS-042 \r"), "WS-042");
        assert_eq!(sanitize_name("pc01; rm -rf /"), "pc01rm-rf");
        assert_eq!(sanitize_name("Компьютер 1"), "Компьютер1");
    }

    #[test]
    fn load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("computer_names.txt");
        fs::write(&path, "PC01\n\n  \nPC02\n...\n").unwrap();
        assert_eq!(load(&path).unwrap(), vec!["PC01", "PC02"]);
    }

    #[test]
    fn seeded_roster_loads_as_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("computer_names.txt");
        seed(&path).unwrap();
        assert_eq!(
            load(&path).unwrap(),
            vec!["computer-1", "computer-2", "computer-3"]
        );
    }
}
