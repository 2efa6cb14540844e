//! TOML-based configuration for the logo applicator.
//!
//! The tool works without any configuration.  When a `logo-apply.toml` file
//! is present in the working directory it may override the asset directories,
//! the resize program, and the default log level:
//!
//! ```toml
//! [general]
//! log_level = "warn"
//!
//! [assets]
//! icon_dir = "TaskPulse/Assets.xcassets/AppIcon.appiconset"
//! logo_dir = "TaskPulse/Assets.xcassets/AppLogo.imageset"
//!
//! [resizer]
//! program = "sips"
//! ```
//!
//! # Serde default values
//!
//! Every section and every field carries a `#[serde(default ...)]`
//! attribute, so a file that only sets `resizer.program` still yields the
//! standard asset directories.  `RUST_LOG`, when set, takes precedence over
//! `general.log_level`.

use std::path::{Path, PathBuf};

use logo_core::{DEFAULT_ICON_DIR, DEFAULT_LOGO_DIR};
use serde::Deserialize;
use thiserror::Error;

use crate::application::assets::AssetDirs;
use crate::infrastructure::resizer::sips::DEFAULT_PROGRAM;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "logo-apply.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub resizer: ResizerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// `tracing` log level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Asset-catalog directories, relative to the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AssetsConfig {
    #[serde(default = "default_icon_dir")]
    pub icon_dir: PathBuf,
    #[serde(default = "default_logo_dir")]
    pub logo_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResizerConfig {
    /// Program invoked with `sips`-compatible arguments.
    #[serde(default = "default_program")]
    pub program: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_icon_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ICON_DIR)
}
fn default_logo_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOGO_DIR)
}
fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            icon_dir: default_icon_dir(),
            logo_dir: default_logo_dir(),
        }
    }
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl AppConfig {
    /// The directory pair handed to the apply use case.
    pub fn asset_dirs(&self) -> AssetDirs {
        AssetDirs {
            icon_dir: self.assets.icon_dir.clone(),
            logo_dir: self.assets.logo_dir.clone(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Full path of the config file inside `dir`.
pub fn config_file_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Loads `AppConfig` from `dir`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = config_file_path(dir);

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
