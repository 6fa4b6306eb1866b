//! Configuration loading, parsing, and validation.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use laya::config::{load_app_config, validate};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yaml");
//! fs::write(&path, "dev:\n  delayServer: http://delay:9278\n").unwrap();
//!
//! let config = load_app_config(&path, "dev").unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.delay_server, "http://delay:9278");
//! ```
//!
//! # Configuration File Location
//!
//! `<root>/<conf dir name>/config.yaml`, unless a file is given
//! explicitly. Top-level keys are environment names (`dev`, `prod`, ...);
//! the `--env` flag picks one, defaulting to `dev`.

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{AppConfig, CacheConfig, DatabaseConfig, I18nConfig, DEFAULT_DELAY_SERVER};

// Loader re-exports
pub use loader::{
    available_environments, load_app_config, load_config_file, parse_config, select_environment,
    ConfigPaths, CONFIG_FILE_NAME, DEFAULT_ENV,
};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
