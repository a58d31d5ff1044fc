//! Centralized error handling for hwreport

use std::fmt;
use std::io;

/// Custom error type for hwreport operations
#[derive(Debug)]
pub enum HwReportError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Configuration errors
    Config(String),
    /// UTF-16 decoding errors on report files
    Encoding(String),
    /// Probe or report-generation failures (ping, msinfo32, hostname)
    Probe(String),
    /// CSV summary write errors
    Csv(csv::Error),
}

impl fmt::Display for HwReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HwReportError::Io(err) => write!(f, "I/O error: {}", err),
            HwReportError::Config(msg) => write!(f, "Config error: {}", msg),
            HwReportError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            HwReportError::Probe(msg) => write!(f, "Probe error: {}", msg),
            HwReportError::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for HwReportError {}

impl From<io::Error> for HwReportError {
    fn from(error: io::Error) -> Self {
        HwReportError::Io(error)
    }
}

impl From<csv::Error> for HwReportError {
    fn from(error: csv::Error) -> Self {
        HwReportError::Csv(error)
    }
}

/// Type alias for Results in hwreport
pub type Result<T> = std::result::Result<T, HwReportError>;
