use crate::error::{HwReportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime settings, loadable from a TOML file. Every field has a default,
/// so a missing config file just means defaults.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Where full reports land; trimmed copies and summaries nest inside.
    pub output_dir: PathBuf,
    /// Roster of machines to collect from.
    pub targets_file: PathBuf,
    pub ping: PingConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PingConfig {
    pub echo_count: u32,
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("MsInfo32Reports"),
            targets_file: PathBuf::from("computer_names.txt"),
            ping: PingConfig::default(),
        }
    }
}

impl Default for PingConfig {
    fn default() -> Self {
        PingConfig {
            echo_count: 2,
            timeout_ms: 2000,
        }
    }
}

impl Config {
    /// Load settings from `path` when it exists, defaults otherwise.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_data = fs::read_to_string(path)?;
        toml::de::from_str(&config_data).map_err(|err| HwReportError::Config(err.to_string()))
    }

    /// Directory for the software-stripped report copies.
    pub fn hardware_dir(&self) -> PathBuf {
        self.output_dir.join("hardware_only_reports")
    }

    /// Directory for the per-run summary artifacts.
    pub fn summary_dir(&self) -> PathBuf {
        self.hardware_dir().join("summary")
    }

    /// Full report path for one machine.
    pub fn report_path(&self, computer: &str) -> PathBuf {
        self.output_dir.join(format!("{}.txt", computer))
    }
}
