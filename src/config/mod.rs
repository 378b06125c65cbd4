use crate::core::overtime::DEFAULT_BASIC_THRESHOLD_MINUTES;
use crate::core::validator::DEFAULT_TOLERANCE_MINUTES;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 4] = [
    "weekly_basic_threshold_minutes",
    "mismatch_tolerance_minutes",
    "wrap_width",
    "employee_name",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_threshold")]
    pub weekly_basic_threshold_minutes: i64,
    #[serde(default = "default_tolerance")]
    pub mismatch_tolerance_minutes: i64,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default)]
    pub employee_name: String,
}

fn default_threshold() -> i64 {
    DEFAULT_BASIC_THRESHOLD_MINUTES
}
fn default_tolerance() -> i64 {
    DEFAULT_TOLERANCE_MINUTES
}
fn default_wrap_width() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekly_basic_threshold_minutes: default_threshold(),
            mismatch_tolerance_minutes: default_tolerance(),
            wrap_width: default_wrap_width(),
            employee_name: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimesheet`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// The file in use: the `--config` override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.weekly_basic_threshold_minutes < 0 {
            return Err(AppError::Config(format!(
                "weekly_basic_threshold_minutes must not be negative (got {})",
                self.weekly_basic_threshold_minutes
            )));
        }
        if self.mismatch_tolerance_minutes < 0 {
            return Err(AppError::Config(format!(
                "mismatch_tolerance_minutes must not be negative (got {})",
                self.mismatch_tolerance_minutes
            )));
        }
        Ok(())
    }

    /// Write the configuration, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Known keys absent from the file at `path` (they fall back to defaults).
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(KNOWN_KEYS.to_vec());
        };

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }
}
