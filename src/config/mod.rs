use crate::core::rules::RuleSet;
use crate::errors::{AppError, AppResult};
use crate::models::ServiceMode;
use crate::utils::path::ensure_parent_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Top-level keys of the configuration file, in file order.
pub const CONFIG_KEYS: &[&str] = &["default_mode", "pending_marker", "plan_delimiter", "rules"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_mode: ServiceMode,
    #[serde(default = "default_pending_marker")]
    pub pending_marker: String,
    #[serde(default = "default_plan_delimiter")]
    pub plan_delimiter: String,
    #[serde(default)]
    pub rules: RuleSet,
}

fn default_pending_marker() -> String {
    "N".to_string()
}
fn default_plan_delimiter() -> String {
    ";".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: ServiceMode::General,
            pending_marker: default_pending_marker(),
            plan_delimiter: default_plan_delimiter(),
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklogs")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklogs")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklogs.conf")
    }

    /// Load configuration from `path` (or the default file); a missing file
    /// means defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.check()?;

        info!(path = %path.display(), rules_version = cfg.rules.version, "configuration loaded");
        Ok(cfg)
    }

    /// Single-column CSV delimiter from `plan_delimiter`.
    pub fn plan_delimiter_byte(&self) -> AppResult<u8> {
        delimiter_byte(&self.plan_delimiter)
    }

    fn check(&self) -> AppResult<()> {
        if self.pending_marker.trim().is_empty() {
            return Err(AppError::Config("pending_marker cannot be empty".into()));
        }
        self.plan_delimiter_byte()?;
        Ok(())
    }

    /// Write the configuration file. Refuses to overwrite unless `force`.
    pub fn save(&self, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        ensure_parent_dir(path)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}

/// Parse a one-character delimiter (`;`, `,`, `\t` or `tab`).
pub fn delimiter_byte(raw: &str) -> AppResult<u8> {
    match raw {
        "\\t" | "tab" => Ok(b'\t'),
        s if s.len() == 1 => Ok(s.as_bytes()[0]),
        other => Err(AppError::Config(format!(
            "invalid delimiter '{other}': expected a single ASCII character"
        ))),
    }
}
