//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wkv/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WkvConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub initial_scope: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COMMAND: &str = "wezterm";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_ARGS: &[&str] = &["show-keys"];
const CONFIG_DIR: &str = ".wkv";
const LOG_FILE_NAME: &str = "wkv.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub command: String,
    pub args: Vec<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub initial_scope: Option<String>,
}

/// Values taken from the command line (None = flag not given).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub log_level: Option<&'a str>,
    pub scope: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.wkv`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.wkv/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.wkv/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WkvConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WkvConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(WkvConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WkvConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<WkvConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WkvConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# wkv Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# command = "wezterm"                # Or set WKV_COMMAND env var
# args = ["show-keys"]

# [log]
# file = "/tmp/wkv.log"              # Default: ~/.wkv/wkv.log
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"

# [ui]
# initial_scope = "Default"          # Table to show on startup
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WkvConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &WkvConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Command: env → config → default
    let command = env("WKV_COMMAND")
        .or_else(|| config.source.command.clone())
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

    let args = config
        .source
        .args
        .clone()
        .unwrap_or_else(|| DEFAULT_ARGS.iter().map(|a| a.to_string()).collect());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .map(str::to_string)
        .or_else(|| env("WKV_LOG_LEVEL"))
        .or_else(|| config.log.level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .log
        .file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config_dir().map(|d| d.join(LOG_FILE_NAME)));

    // Initial scope: CLI → config
    let initial_scope = cli
        .scope
        .map(str::to_string)
        .or_else(|| config.ui.initial_scope.clone());

    ResolvedConfig {
        command,
        args,
        log_file,
        log_level,
        initial_scope,
    }
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}");
        DEFAULT_LOG_LEVEL
    })
}
