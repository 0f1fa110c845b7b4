//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.coop/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::PLACEHOLDER_TEXT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CoopConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Contact number shown when the panel is revealed.
    pub number: Option<String>,
    /// Text shown instead when no number is configured.
    pub placeholder_text: Option<String>,
    /// Log level for coop.log ("off", "error", "warn", "info", "debug", "trace").
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub number: Option<String>,
    pub placeholder_text: String,
    pub log_level: String,
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

/// Returns the path to `~/.coop/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".coop").join("config.toml"))
}

/// Load config from `override_path` if given, else `~/.coop/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `CoopConfig::default()`. If a file exists but is malformed,
/// returns `ConfigError::Parse`. An explicitly passed path must exist.
pub fn load_config(override_path: Option<&Path>) -> Result<CoopConfig, ConfigError> {
    if let Some(path) = override_path {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: CoopConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CoopConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CoopConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: CoopConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Coop Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# number = "+1 555 0199"                            # Or set COOP_NUMBER env var
# placeholder_text = "Not yet live - check back later!"
# log_level = "info"                                # "off" .. "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_number` is from the `--number` flag (None = not specified).
pub fn resolve(config: &CoopConfig, cli_number: Option<&str>) -> ResolvedConfig {
    // Number: CLI → env → config → none (placeholder shown instead)
    let number = cli_number
        .map(|s| s.to_string())
        .or_else(|| std::env::var("COOP_NUMBER").ok())
        .or_else(|| config.general.number.clone());

    ResolvedConfig {
        number,
        placeholder_text: config
            .general
            .placeholder_text
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_TEXT.to_string()),
        log_level: config
            .general
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CoopConfig::default();
        assert!(config.general.number.is_none());
        assert!(config.general.placeholder_text.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CoopConfig::default();
        let resolved = resolve(&config, None);
        assert!(resolved.number.is_none());
        assert_eq!(resolved.placeholder_text, PLACEHOLDER_TEXT);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CoopConfig {
            general: GeneralConfig {
                number: Some("+44 20 5550 0199".to_string()),
                placeholder_text: Some("Ring the coop".to_string()),
                log_level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.number.as_deref(), Some("+44 20 5550 0199"));
        assert_eq!(resolved.placeholder_text, "Ring the coop");
        assert_eq!(resolved.log_level, "debug");
    }

    #[test]
    fn test_resolve_cli_number_wins() {
        let config = CoopConfig {
            general: GeneralConfig {
                number: Some("from-config".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("from-cli"));
        assert_eq!(resolved.number.as_deref(), Some("from-cli"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
number = "+1 555 0199"
placeholder_text = "Coming soon"
log_level = "warn"
"#;
        let config: CoopConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.number.as_deref(), Some("+1 555 0199"));
        assert_eq!(
            config.general.placeholder_text.as_deref(),
            Some("Coming soon")
        );
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
log_level = "debug"
"#;
        let config: CoopConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert!(config.general.number.is_none());
        assert!(config.general.placeholder_text.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: CoopConfig = toml::from_str("").unwrap();
        assert!(config.general.number.is_none());
    }
}
