//! # Deskbot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Deskbot, handling
//! loading, merging, and access to configuration data. The reference design
//! hard-wired the two response-file names as static constants; here they are
//! explicit, overridable configuration so tests and users can point the
//! responder at any pair of files.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - A missing configuration file is normal, not an error
//! - A present-but-malformed file is reported and skipped, matching the
//!   degrade-and-continue posture of response-store construction
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.deskbot.toml` in the current directory
//! 2. User-specific `config.toml` under the platform config directory
//! 3. Default values defined in the code (`mapped.txt` / `default.txt`,
//!    resolved relative to the run location)
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config();
//!
//! // Paths of the two response resources.
//! let mapped = &cfg.responses.mapped_file;
//! let defaults = &cfg.responses.default_file;
//! ```
//!
//! The configuration is loaded once at startup and passed to the modules
//! that need it.
//!
use crate::core::error::{DeskbotError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub responses: ResponsesConfig,
}

/// Locations of the two response resources consumed by the `ResponseStore`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResponsesConfig {
    /// File holding the keyword→response mapping blocks.
    #[serde(default = "default_mapped_file")]
    pub mapped_file: String,
    /// File holding the default-response pool blocks.
    #[serde(default = "default_default_file")]
    pub default_file: String,
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        ResponsesConfig {
            mapped_file: default_mapped_file(),
            default_file: default_default_file(),
        }
    }
}

// --- Default value functions ---
fn default_mapped_file() -> String {
    "mapped.txt".to_string()
}
fn default_default_file() -> String {
    "default.txt".to_string()
}

/// Name of the project-local configuration file.
const PROJECT_CONFIG_FILENAME: &str = ".deskbot.toml";

/// # Load Configuration (`load_config`)
///
/// Loads the effective configuration: user-level file first, then the
/// project-local file layered on top, then built-in defaults for anything
/// still unset. Never fails — unreadable or malformed sources are reported
/// via the warning channel and treated as absent.
pub fn load_config() -> Config {
    let user_config = load_user_config();
    let project_config = load_project_config();
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    debug!("Final loaded configuration: {:?}", merged_config);
    merged_config
}

/// Loads the user-level configuration file, if one exists.
fn load_user_config() -> Option<Config> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Deskbot", "deskbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            try_load_config_from_path(&config_path)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            None
        }
    } else {
        warn!("Could not determine user config directory.");
        None
    }
}

/// Loads the project-local `.deskbot.toml` from the current directory, if present.
fn load_project_config() -> Option<Config> {
    let project_config_path = PathBuf::from(PROJECT_CONFIG_FILENAME);
    if project_config_path.is_file() {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        try_load_config_from_path(&project_config_path)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory.",
            PROJECT_CONFIG_FILENAME
        );
        None
    }
}

/// Parses a config file, downgrading any failure to a warning.
fn try_load_config_from_path(path: &Path) -> Option<Config> {
    match load_config_from_path(path) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!("Ignoring configuration file: {:#}", e);
            None
        }
    }
}

/// Reads and deserializes one TOML configuration file.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow::anyhow!(DeskbotError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

/// Merges user and project configuration; project values win wherever they
/// differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.responses.mapped_file = if project_cfg.responses.mapped_file != default_mapped_file() {
        project_cfg.responses.mapped_file
    } else {
        user.responses.mapped_file
    };
    merged.responses.default_file = if project_cfg.responses.default_file != default_default_file()
    {
        project_cfg.responses.default_file
    } else {
        user.responses.default_file
    };
    merged
}
