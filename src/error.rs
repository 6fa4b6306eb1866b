//! Error types for Laya operations.
//!
//! This module defines [`LayaError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing in this crate panics on bad input; every failure is returned
//! - A few variants are *fatal*: the host application cannot continue once
//!   it sees them and is expected to exit at the call site. Check with
//!   [`LayaError::is_fatal`]
//! - Collaborator failures arrive as `anyhow::Error` and are wrapped in
//!   [`LayaError::ServiceInit`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Laya operations.
#[derive(Debug, Error)]
pub enum LayaError {
    /// The root path was already fixed to a different value.
    #[error("Root path cannot be set twice: already {current}, requested {requested}")]
    RootPathConflict {
        current: PathBuf,
        requested: PathBuf,
    },

    /// The current working directory could not be read.
    #[error("Cannot determine current working directory: {0}")]
    WorkingDirUnavailable(#[source] std::io::Error),

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The config file has no section for the selected environment.
    #[error("No '{env}' section in {path}")]
    EnvironmentNotFound { env: String, path: PathBuf },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external service (database, cache, locales) failed to start.
    #[error("Failed to initialize {service}: {source}")]
    ServiceInit {
        service: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayaError {
    /// Whether this error must terminate the host process.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RootPathConflict { .. } | Self::WorkingDirUnavailable(_) | Self::ServiceInit { .. }
        )
    }
}

/// Result type alias for Laya operations.
pub type Result<T> = std::result::Result<T, LayaError>;
