//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.term-todo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::DEFAULT_PAGE_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub page_size: Option<usize>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "term-todo.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Directory holding one `<account>.db` per account
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub page_size: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.term-todo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".term-todo").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from the default location.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit file is an error, as is a malformed file.
pub fn load_config(explicit: Option<&Path>) -> Result<TodoConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Ok(TodoConfig::default()),
        },
    };

    if explicit.is_none() && !path.exists() {
        generate_default_config(&path);
        return Ok(TodoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigError::Parse { path, source })
}

pub fn parse_config(contents: &str) -> Result<TodoConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Generates a commented-out default config file at the given path.
/// Failures are ignored; the app runs on defaults either way.
fn generate_default_config(path: &Path) {
    let default_content = r#"# term-todo Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [general]
# data_dir = "."                  # Where <account>.db files are kept
# log_file = "term-todo.log"
# log_level = "info"              # "error", "warn", "info", "debug", "trace", "off"

# [store]
# page_size = 20                  # Items shown per page
"#;

    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let _ = fs::write(path, default_content);
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
pub fn resolve(config: &TodoConfig, cli: &CliOverrides) -> ResolvedConfig {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.general.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Unparseable levels fall back to the default
    let log_level = cli
        .log_level
        .as_deref()
        .or(config.general.log_level.as_deref())
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let page_size = config
        .store
        .page_size
        .filter(|&size| size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    ResolvedConfig {
        data_dir,
        log_file,
        log_level,
        page_size,
    }
}
