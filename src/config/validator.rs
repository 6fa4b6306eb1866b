//! Configuration validation rules.
//!
//! This module checks a loaded section before any service is started:
//! - An open database must have a `dsn`
//! - An open cache must have an `addr`
//! - Idle connections cannot exceed the open connection cap

use crate::config::schema::AppConfig;
use crate::error::{LayaError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &AppConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_database(config));
    errors.extend(validate_cache(config));

    errors
}

fn validate_database(config: &AppConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let db = &config.database;

    if db.open && db.dsn.trim().is_empty() {
        errors.push(ValidationError {
            rule: "missing-dsn".to_string(),
            message: "database is open but 'dsn' is empty".to_string(),
        });
    }

    if db.max_idle_conn > 0 && db.max_open_conn > 0 && db.max_idle_conn > db.max_open_conn {
        errors.push(ValidationError {
            rule: "idle-exceeds-open".to_string(),
            message: format!(
                "database 'maxIdleConn' ({}) exceeds 'maxOpenConn' ({})",
                db.max_idle_conn, db.max_open_conn
            ),
        });
    }

    errors
}

fn validate_cache(config: &AppConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.cache.open && config.cache.addr.trim().is_empty() {
        errors.push(ValidationError {
            rule: "missing-addr".to_string(),
            message: "cache is open but 'addr' is empty".to_string(),
        });
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &AppConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LayaError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
