//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use spindle::{SpindleError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for SpindleError {
    fn from(err: ConfigError) -> Self {
        SpindleError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (spindle/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SpindleError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("spindle/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "spindle", "spindle") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SpindleError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;

    Ok(config)
}

/// Reject values that parse as TOML but cannot drive a session.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.simulation().count() == 0 {
        return Err(ConfigError::Validation(
            "simulation.count must be at least 1".to_string(),
        ));
    }
    config.style().palette().map_err(ConfigError::Validation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use spindle::{algorithm::Algorithm, direction::Direction};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_path_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[simulation]\nmax_track = 99\nalgorithm = \"c-look\"\ndirection = \"left\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        let simulation = config.simulation();
        assert_eq!(simulation.max_track(), 99);
        assert_eq!(simulation.algorithm(), Algorithm::CLook);
        assert_eq!(simulation.direction(), Direction::TowardZero);
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        match err {
            SpindleError::Config(message) => {
                assert!(message.starts_with("Missing configuration file"));
            }
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[simulation\nmax_track = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SpindleError::Config(ref m) if m.starts_with("Failed to parse TOML")));
    }

    #[test]
    fn test_invalid_color_fails_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nbar_color = \"not-a-color\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SpindleError::Config(ref m) if m.starts_with("Validation error")));
    }

    #[test]
    fn test_zero_count_fails_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[simulation]\ncount = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        match err {
            SpindleError::Config(message) => {
                assert_eq!(message, "Validation error: simulation.count must be at least 1");
            }
            other => panic!("expected a config error, got {other:?}"),
        }
    }
}
