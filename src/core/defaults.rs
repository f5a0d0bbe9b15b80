use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::paths;
use crate::utils::io;

/// Root configuration structure for dashgen.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashgenConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via dashgen.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Used when the project name prompt is left empty.
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Single tab created when no tab names are given.
    #[serde(default = "default_tab")]
    pub default_tab: String,

    #[serde(default = "default_window")]
    pub window: WindowConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            default_tab: default_tab(),
            window: default_window(),
        }
    }
}

/// Initial size of the generated application's window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        default_window()
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_project_name() -> String {
    crate::utils::naming::FALLBACK_IDENTIFIER.to_string()
}

fn default_tab() -> String {
    "Items".to_string()
}

fn default_window() -> WindowConfig {
    WindowConfig {
        width: default_window_width(),
        height: default_window_height(),
    }
}

fn default_window_width() -> u32 {
    700
}

fn default_window_height() -> u32 {
    500
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If dashgen.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full dashgen.json config, falling back to defaults on any error.
pub fn load_config() -> DashgenConfig {
    load_config_checked().unwrap_or_default()
}

/// Load dashgen.json, reporting a file that exists but does not parse.
/// A missing file yields built-in defaults.
pub fn load_config_checked() -> crate::Result<DashgenConfig> {
    load_config_or_default(&paths::dashgen_json()?)
}

fn load_config_or_default(path: &Path) -> crate::Result<DashgenConfig> {
    if !path.exists() {
        return Ok(DashgenConfig::default());
    }
    load_config_from(path)
}

/// Parse a config file. A missing file is an error so callers can fall back.
pub fn load_config_from(path: &Path) -> crate::Result<DashgenConfig> {
    if !path.exists() {
        return Err(crate::Error::other(format!("{} not found", path.display())));
    }

    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Check if dashgen.json file exists
pub fn config_exists() -> bool {
    paths::dashgen_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Get the path to dashgen.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::dashgen_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
