//! Configuration and parameter file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files from
//! various locations (explicit path, local directory, system directory), and
//! loading layout parameter files.

use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::de::DeserializeOwned;
use thiserror::Error;

use auditorium::config::AppConfig;
use auditorium_core::params::LayoutParameters;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML file {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        src: String,
        message: String,
        span: Option<Range<usize>>,
    },

    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (auditorium/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_toml_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("auditorium/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_toml_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "auditorium", "auditorium") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_toml_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load layout parameters from `path`, or the reference room when no path is given.
///
/// # Errors
///
/// Returns error if the file is missing, unreadable, or not valid parameter TOML.
pub fn load_parameters(path: Option<impl AsRef<Path>>) -> Result<LayoutParameters, ConfigError> {
    match path {
        Some(path) => {
            let path = path.as_ref();
            info!(path = path.display().to_string(); "Loading layout parameters");
            load_toml_file(path)
        }
        None => {
            debug!("No parameter file given, using reference room");
            Ok(LayoutParameters::default())
        }
    }
}

/// Load and deserialize a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    // Read file content
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Parse TOML content
    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
        span: err.span(),
        src: content,
    })
}
