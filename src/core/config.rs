use crate::config::Config;
use crate::config::migrate::{migrate_file, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values merged with defaults).
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        info(format!("Configuration file: {}", path.display()));
        if !path.exists() {
            warning("File not found: showing built-in defaults");
        }
        print!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the file.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "{} not found: run `rworklogs init` to create it",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let missing = missing_fields(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete");
        } else {
            for field in &missing {
                warning(format!("Missing field: {field}"));
            }
            info("Run `rworklogs config --migrate` to add them with default values");
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        let actions = migrate_file(path)?;
        if actions.is_empty() {
            success("Configuration already up to date");
        } else {
            for action in &actions {
                info(action);
            }
            success(format!("Configuration migrated: {}", path.display()));
        }
        Ok(())
    }

    /// Open the file in `editor`, `$EDITOR`/`$VISUAL`, or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => {
                        success(format!(
                            "Configuration file edited successfully using fallback '{default_editor}'"
                        ));
                        Ok(())
                    }
                    _ => Err(AppError::Config(format!(
                        "failed to edit configuration file using '{default_editor}'"
                    ))),
                }
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{editor_to_use}'"
            ))),
        }
    }
}
