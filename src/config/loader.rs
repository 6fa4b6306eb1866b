//! Configuration file discovery and loading.
//!
//! The config file is a YAML mapping of environment name to an
//! [`AppConfig`] section. Only the selected environment is deserialized.

use crate::config::schema::AppConfig;
use crate::environment::EnvironmentSettings;
use crate::error::{LayaError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file name inside the config root.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment section used when none is selected.
pub const DEFAULT_ENV: &str = "dev";

/// Location of the config file for a settings instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPaths {
    /// `<root>/<conf dir name>`
    pub conf_root: PathBuf,

    /// The config file to load
    pub file: PathBuf,
}

impl ConfigPaths {
    /// Locate `config.yaml` under the settings' config root.
    ///
    /// # Errors
    ///
    /// Fails only when the root path cannot be resolved.
    pub fn discover(settings: &EnvironmentSettings) -> Result<Self> {
        Self::with_override(settings, None)
    }

    /// Like [`discover`](Self::discover), but an explicit file wins.
    pub fn with_override(settings: &EnvironmentSettings, file: Option<&Path>) -> Result<Self> {
        let conf_root = settings.conf_root_path()?;
        let file = match file {
            Some(path) => path.to_path_buf(),
            None => conf_root.join(CONFIG_FILE_NAME),
        };
        Ok(Self { conf_root, file })
    }

    /// Check whether the config file exists.
    pub fn exists(&self) -> bool {
        self.file.is_file()
    }
}

/// Load a config file as a raw YAML document.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or is not a mapping.
pub fn load_config_file(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LayaError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LayaError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a raw document.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<serde_yaml::Value> {
    let doc: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| LayaError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if !doc.is_mapping() {
        return Err(LayaError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: "expected a mapping of environment names to settings".to_string(),
        });
    }

    Ok(doc)
}

/// Environment names defined in a document, in file order.
pub fn available_environments(doc: &serde_yaml::Value) -> Vec<String> {
    doc.as_mapping()
        .map(|m| {
            m.keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Deserialize the section for `env`.
///
/// An empty section (`dev:` with nothing under it) yields the defaults.
///
/// # Errors
///
/// Returns `EnvironmentNotFound` if the section is missing.
/// Returns `ConfigParseError` if the section has the wrong shape.
pub fn select_environment(
    doc: &serde_yaml::Value,
    env: &str,
    source_path: &Path,
) -> Result<AppConfig> {
    let section = doc
        .get(env)
        .ok_or_else(|| LayaError::EnvironmentNotFound {
            env: env.to_string(),
            path: source_path.to_path_buf(),
        })?;

    if section.is_null() {
        return Ok(AppConfig::default());
    }

    serde_yaml::from_value(section.clone()).map_err(|e| LayaError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: format!("section '{}': {}", env, e),
    })
}

/// Load `path` and return the settings for `env`.
pub fn load_app_config(path: &Path, env: &str) -> Result<AppConfig> {
    let doc = load_config_file(path)?;
    let config = select_environment(&doc, env, path)?;
    debug!(path = %path.display(), env, "loaded config");
    Ok(config)
}
