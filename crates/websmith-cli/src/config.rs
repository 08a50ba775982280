//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use websmith_core::domain::{DEFAULT_SERVER_MODE, DEFAULT_SERVER_PORT};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Port written into generated config files when `--port` is not given.
    pub port: u16,
    /// Run mode written into generated config files (`server.mode`).
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// "auto" (TTY detection), "human", or "plain".
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            mode: DEFAULT_SERVER_MODE.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// When `config_file` is `Some`, the file must exist and parse — a typo'd
    /// `--config` path is a hard error.  When it is `None`, the default
    /// location is consulted and silently skipped if absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.websmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "websmith", "websmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".websmith.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_8888() {
        assert_eq!(AppConfig::default().defaults.port, 8888);
    }

    #[test]
    fn default_mode_matches_generated_config() {
        assert_eq!(AppConfig::default().defaults.mode, "debug");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_format_leaves_tty_detection_on() {
        assert_eq!(AppConfig::default().output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/websmith.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\nport = 9000\n").unwrap();
        assert_eq!(cfg.defaults.port, 9000);
        assert_eq!(cfg.defaults.mode, "debug");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn mode_is_read_from_file() {
        let cfg: AppConfig = toml::from_str("[defaults]\nmode = \"release\"\n").unwrap();
        assert_eq!(cfg.defaults.mode, "release");
        assert_eq!(cfg.defaults.port, 8888);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
