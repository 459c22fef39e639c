//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPCALC_*`)
//! 2. Config file (`config.toml`)
//! 3. Defaults (this file)
//!
//! ## Config File Location
//! - `--config PATH` (must exist)
//! - else `TIPCALC_CONFIG` (must exist)
//! - else the platform config directory, optional:
//!   - **Linux**: `~/.config/tipcalc/config.toml`
//!   - **macOS**: `~/Library/Application Support/com.tipcalc.tipcalc/config.toml`
//!   - **Windows**: `%APPDATA%\tipcalc\tipcalc\config\config.toml`
//!
//! ## Example `config.toml`
//! ```toml
//! default_tip_percentage = 20
//! quick_tips = [15, 18, 20, 25]
//!
//! [currency]
//! code = "USD"
//! symbol = "$"
//! thousands_separator = ","
//! decimal_separator = "."
//! ```
//!
//! Slider and split bounds are fixed and cannot be configured.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tipcalc_core::{
    CurrencyFormat, QuickTips, TipPercentage, DEFAULT_QUICK_TIPS, DEFAULT_TIP_PERCENTAGE,
};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TIPCALC_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Tip percentage a new (or reset) calculator starts at.
    pub default_tip_percentage: u32,

    /// Quick tip buttons. Applied verbatim, so values outside the slider's
    /// 10–30 range are allowed.
    pub quick_tips: Vec<u32>,

    /// Currency display settings.
    pub currency: CurrencyFormat,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Tip: 18%
    /// - Quick tips: 15, 18, 20, 25
    /// - Currency: USD, `$1,234.56`
    fn default() -> Self {
        ConfigState {
            default_tip_percentage: DEFAULT_TIP_PERCENTAGE,
            quick_tips: DEFAULT_QUICK_TIPS.to_vec(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the file system and process environment.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process
    /// environment.
    pub fn load_with<F>(explicit: Option<&Path>, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = explicit
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match required {
            Some(path) => Self::from_file(&path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    ConfigState::default()
                }
            },
        };

        config.apply_env(lookup);
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CliError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CliError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let config = toml::from_str(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Config file loaded");
        Ok(config)
    }

    /// Applies `TIPCALC_*` overrides.
    ///
    /// ## Environment Variables
    /// - `TIPCALC_DEFAULT_TIP`: starting tip, e.g. `"20"`
    /// - `TIPCALC_QUICK_TIPS`: comma list, e.g. `"10,15,20"`
    /// - `TIPCALC_CURRENCY_SYMBOL`: e.g. `"€"`
    /// - `TIPCALC_CURRENCY_CODE`: e.g. `"EUR"`
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("TIPCALC_DEFAULT_TIP") {
            match raw.trim().parse::<u32>() {
                Ok(tip) => self.default_tip_percentage = tip,
                Err(_) => warn!(value = %raw, "Ignoring invalid TIPCALC_DEFAULT_TIP"),
            }
        }

        if let Some(raw) = lookup("TIPCALC_QUICK_TIPS") {
            let parsed: Result<Vec<u32>, _> = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::parse::<u32>)
                .collect();
            match parsed {
                Ok(tips) => self.quick_tips = tips,
                Err(_) => warn!(value = %raw, "Ignoring invalid TIPCALC_QUICK_TIPS"),
            }
        }

        if let Some(symbol) = lookup("TIPCALC_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        if let Some(code) = lookup("TIPCALC_CURRENCY_CODE") {
            self.currency.code = code;
        }
    }

    /// The starting tip percentage.
    pub fn default_tip(&self) -> TipPercentage {
        TipPercentage::new(self.default_tip_percentage)
    }

    /// The quick tip buttons, sorted and deduplicated.
    pub fn quick_tips(&self) -> QuickTips {
        QuickTips::from_percents(self.quick_tips.iter().copied())
    }
}

/// Platform config file path, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "tipcalc", "tipcalc").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.default_tip().percent(), 18);
        assert_eq!(config.quick_tips(), QuickTips::default());
        assert_eq!(config.currency.format(1234.5), "$1,234.50");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_tip_percentage = 20").unwrap();
        writeln!(file, "[currency]").unwrap();
        writeln!(file, "symbol = \"€\"").unwrap();

        let config = ConfigState::from_file(file.path()).unwrap();
        assert_eq!(config.default_tip_percentage, 20);
        assert_eq!(config.quick_tips, vec![15, 18, 20, 25]);
        assert_eq!(config.currency.symbol, "€");
        assert_eq!(config.currency.thousands_separator, ",");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = ConfigState::load_with(Some(&missing), env(&[])).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quick_tips = \"lots\"").unwrap();

        let err = ConfigState::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }

    #[test]
    fn test_config_path_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quick_tips = [10, 12, 35]").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = ConfigState::load_with(None, env(&[(CONFIG_PATH_ENV, &path)])).unwrap();
        let tips: Vec<u32> = config.quick_tips().iter().map(|t| t.percent()).collect();
        assert_eq!(tips, vec![10, 12, 35]);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_tip_percentage = 20").unwrap();

        let config = ConfigState::load_with(
            Some(file.path()),
            env(&[
                ("TIPCALC_DEFAULT_TIP", "22"),
                ("TIPCALC_QUICK_TIPS", "25, 15,20"),
                ("TIPCALC_CURRENCY_SYMBOL", "£"),
                ("TIPCALC_CURRENCY_CODE", "GBP"),
            ]),
        )
        .unwrap();

        assert_eq!(config.default_tip_percentage, 22);
        assert_eq!(config.quick_tips, vec![25, 15, 20]);
        assert_eq!(config.currency.symbol, "£");
        assert_eq!(config.currency.code, "GBP");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = ConfigState::default();
        config.apply_env(env(&[
            ("TIPCALC_DEFAULT_TIP", "lots"),
            ("TIPCALC_QUICK_TIPS", "15,x"),
        ]));
        assert_eq!(config, ConfigState::default());
    }
}
