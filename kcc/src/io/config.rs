//! Tool configuration stored as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::locator::expand_home;

/// kcc configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable.
/// Missing fields default to sensible values; a missing file yields the
/// defaults outright so the tool runs with CLI flags alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Library directories searched after any CLI-supplied ones.
    pub library: Vec<String>,

    /// Default suite file used when `--suite` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,

    /// Wall-clock budget for one script execution, in seconds.
    pub script_timeout_secs: u64,

    /// Truncate captured script stdout/stderr beyond this many bytes.
    pub output_limit_bytes: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            library: Vec::new(),
            suite: None,
            script_timeout_secs: 300,
            output_limit_bytes: 100_000,
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.script_timeout_secs == 0 {
            return Err(anyhow!("script_timeout_secs must be > 0"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        Ok(())
    }
}

/// Config path: the explicit flag, else `~/.kcc.toml` when present, else
/// the system-wide `/etc/kcc/config.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let home_config = expand_home("~/.kcc.toml");
    if home_config.is_file() {
        return home_config;
    }
    PathBuf::from("/etc/kcc/config.toml")
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ToolConfig::default()`.
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    if !path.exists() {
        let config = ToolConfig::default();
        config.validate()?;
        return Ok(config);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: ToolConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        let config = ToolConfig {
            library: vec!["/usr/lib/kcc".to_string()],
            suite: Some("/etc/kcc/suite.yml".to_string()),
            ..ToolConfig::default()
        };
        let contents = toml::to_string_pretty(&config).expect("serialize");
        fs::write(&path, contents).expect("write");

        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "script_timeout_secs = 0\n").expect("write");

        let err = load_config(&path).expect_err("should fail");
        assert!(err.to_string().contains("script_timeout_secs"));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "library = not-a-list\n").expect("write");

        let err = load_config(&path).expect_err("should fail");
        assert!(err.to_string().contains("config.toml"));
    }
}
