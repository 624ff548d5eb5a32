//! Configuration file checks and migrations.
//!
//! The rule table keeps growing; older files lack keys or carry an older
//! `rules.version`. Serde defaults already make such files load, these
//! helpers make the gap visible and write the missing keys back.

use super::{CONFIG_KEYS, Config};
use crate::core::rules::{RULE_KEYS, RULES_VERSION};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::info;

fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(
            "configuration file must be a YAML mapping".into(),
        )),
    }
}

fn defaults() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// Keys absent from `content`, as `key` or `rules.key`.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let map = parse_mapping(content)?;
    let mut missing = Vec::new();

    for name in CONFIG_KEYS {
        if !map.contains_key(*name) {
            missing.push(name.to_string());
        }
    }

    if let Some(Value::Mapping(rules)) = map.get("rules") {
        for name in RULE_KEYS {
            if !rules.contains_key(*name) {
                missing.push(format!("rules.{name}"));
            }
        }
    }

    Ok(missing)
}

/// Fill missing keys with defaults and bump the rule-table version.
/// Returns the new YAML and a description of each change; no changes means
/// the content is already current.
pub fn migrate_content(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut map = parse_mapping(content)?;
    let defaults = defaults()?;
    let mut actions = Vec::new();

    for name in CONFIG_KEYS {
        if !map.contains_key(*name)
            && let Some(v) = defaults.get(*name)
        {
            map.insert(key(name), v.clone());
            actions.push(format!("added {name}"));
        }
    }

    let default_rules = match defaults.get("rules") {
        Some(Value::Mapping(r)) => r.clone(),
        _ => Mapping::new(),
    };

    if let Some(Value::Mapping(rules)) = map.get_mut("rules") {
        for name in RULE_KEYS {
            if !rules.contains_key(*name)
                && let Some(v) = default_rules.get(*name)
            {
                rules.insert(key(name), v.clone());
                actions.push(format!("added rules.{name}"));
            }
        }

        let version = rules
            .get("version")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        if version < u64::from(RULES_VERSION) {
            rules.insert(key("version"), Value::Number(RULES_VERSION.into()));
            actions.push(format!(
                "rules.version {version} -> {RULES_VERSION}"
            ));
        }
    } else {
        return Err(AppError::Config("'rules' must be a YAML mapping".into()));
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(map))?;
    Ok((yaml, actions))
}

/// Migrate the file at `path` in place. A missing file is left alone.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let (yaml, actions) = migrate_content(&content)?;

    if !actions.is_empty() {
        fs::write(path, yaml)?;
        info!(path = %path.display(), changes = actions.len(), "configuration migrated");
    }

    Ok(actions)
}
