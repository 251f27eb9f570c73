use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::InvestmentParameters;

const APP_DIR: &str = "compound";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub default_principal: f64,
    pub default_contribution: f64,
    pub default_rate_percent: f64,
    pub default_years: u32,
    /// Maximum number of history entries a session keeps.
    pub history_capacity: usize,
    /// How many entries the history panel shows.
    pub history_display_limit: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_principal: 1000.0,
            default_contribution: 200.0,
            default_rate_percent: 10.0,
            default_years: 5,
            history_capacity: 50,
            history_display_limit: 10,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_settings_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let file = File::open(&path).with_context(|| format!("Could not open {}", path.display()))?;
        let settings: Settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse {}", path.display()))?;
        settings.validate()?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity < 1 {
            bail!("history_capacity must be at least 1");
        }
        if self.history_display_limit < 1 {
            bail!("history_display_limit must be at least 1");
        }
        self.default_parameters()
            .validate()
            .map_err(|e| anyhow!("Invalid default parameters: {}", e))?;
        Ok(())
    }

    pub fn default_parameters(&self) -> InvestmentParameters {
        InvestmentParameters::with_rate_percent(
            self.default_principal,
            self.default_contribution,
            self.default_rate_percent,
            self.default_years,
        )
    }
}

/// `<config dir>/compound`, falling back to `~/.compound`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::config_dir() {
        return Ok(dir.join(APP_DIR));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(format!(".{}", APP_DIR)))
}

/// `<data dir>/compound`, falling back to `~/.compound`. Holds the log file.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::data_dir() {
        return Ok(dir.join(APP_DIR));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(format!(".{}", APP_DIR)))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(Some(&dir.path().join("nope.json"))).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_parameters().years, 5);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir, r#"{ "default_years": 20, "history_capacity": 5 }"#);

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.default_years, 20);
        assert_eq!(settings.history_capacity, 5);
        assert_eq!(settings.default_principal, 1000.0);
        assert_eq!(settings.history_display_limit, 10);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir, "{ not json");
        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir, r#"{ "default_years": 0 }"#);
        assert!(Settings::load(Some(&path)).is_err());

        let path = write_settings(&dir, r#"{ "history_capacity": 0 }"#);
        assert!(Settings::load(Some(&path)).is_err());
    }
}
