//! # Configuration
//!
//! Optional settings with a simple override hierarchy: defaults → config file.
//!
//! Config lives at `~/.todoer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::store::DATA_DIR;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub help: HelpConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub char_limit: Option<usize>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HelpConfig {
    pub show_all: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_CHAR_LIMIT: usize = 156;
pub const DEFAULT_PLACEHOLDER: &str = "Add a new Todo";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub char_limit: usize,
    pub placeholder: String,
    pub show_full_help: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&TodoerConfig::default())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.todoer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DATA_DIR).join("config.toml"))
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TodoerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: &Path) -> Result<TodoerConfig, ConfigError> {
    if !path.exists() {
        generate_default_config(path)?;
        return Ok(TodoerConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

const DEFAULT_CONFIG: &str = r#"# Todoer Configuration
# All settings are optional. Defaults are used for anything not specified.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [input]
# char_limit = 156                   # Longest todo the input box accepts
# placeholder = "Add a new Todo"

# [help]
# show_all = false                   # Start with the expanded help panel
"#;

/// Writes the commented-out default config to `path`.
fn generate_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse the sparse config into concrete values.
pub fn resolve(config: &TodoerConfig) -> ResolvedConfig {
    // An unknown level name falls back to the default rather than failing startup
    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        log_level,
        char_limit: config
            .input
            .char_limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_CHAR_LIMIT),
        placeholder: config
            .input
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        show_full_help: config.help.show_all.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&TodoerConfig::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.char_limit, DEFAULT_CHAR_LIMIT);
        assert_eq!(resolved.placeholder, DEFAULT_PLACEHOLDER);
        assert!(!resolved.show_full_help);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TodoerConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
            },
            input: InputConfig {
                char_limit: Some(40),
                placeholder: Some("What needs doing?".to_string()),
            },
            help: HelpConfig {
                show_all: Some(true),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.char_limit, 40);
        assert_eq!(resolved.placeholder, "What needs doing?");
        assert!(resolved.show_full_help);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = TodoerConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
            },
            input: InputConfig {
                char_limit: Some(0),
                placeholder: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.char_limit, DEFAULT_CHAR_LIMIT);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[input]
char_limit = 80
"#;
        let config: TodoerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.char_limit, Some(80));
        assert!(config.input.placeholder.is_none());
        assert!(config.general.log_level.is_none());
        assert!(config.help.show_all.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_and_empty() {
        let config: TodoerConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.general.log_level.is_none());
        assert!(config.input.char_limit.is_none());
    }

    #[test]
    fn test_load_config_generates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config(&path).unwrap();
        assert!(config.input.char_limit.is_none());
        assert!(path.exists());
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input\nchar_limit = ").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }
}
