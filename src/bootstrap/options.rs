//! Client options built from config sections.
//!
//! Config files speak in plain numbers (hours, seconds, 0 for "no limit");
//! collaborators get typed options instead.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{CacheConfig, DatabaseConfig, I18nConfig};

const SECS_PER_HOUR: u64 = 60 * 60;

/// Database pool options.
#[derive(Clone, PartialEq, Eq)]
pub struct PoolOptions {
    /// Driver connection string.
    pub dsn: String,
    /// Idle connections to keep (0 = driver default).
    pub max_idle: u32,
    /// Open connection cap (0 = unlimited).
    pub max_open: u32,
    /// Connection lifetime; `None` means connections are reused forever.
    pub max_lifetime: Option<Duration>,
}

impl From<&DatabaseConfig> for PoolOptions {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            dsn: config.dsn.clone(),
            max_idle: config.max_idle_conn,
            max_open: config.max_open_conn,
            max_lifetime: non_zero(config.conn_max_lifetime.saturating_mul(SECS_PER_HOUR)),
        }
    }
}

impl fmt::Debug for PoolOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolOptions")
            .field("dsn", &mask_dsn(&self.dsn))
            .field("max_idle", &self.max_idle)
            .field("max_open", &self.max_open)
            .field("max_lifetime", &self.max_lifetime)
            .finish()
    }
}

/// Cache client options.
#[derive(Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// `host:port`.
    pub addr: String,
    /// Logical database index.
    pub db: u32,
    /// Pool size (0 = client default).
    pub pool_size: u32,
    /// Retries per command.
    pub max_retries: u32,
    /// Idle timeout; `None` keeps idle connections open.
    pub idle_timeout: Option<Duration>,
    /// Password, only when one is configured.
    pub password: Option<String>,
}

impl From<&CacheConfig> for CacheOptions {
    fn from(config: &CacheConfig) -> Self {
        Self {
            addr: config.addr.clone(),
            db: config.db,
            pool_size: config.pool_size,
            max_retries: config.max_retries,
            idle_timeout: non_zero(config.idle_timeout),
            password: (!config.pwd.is_empty()).then(|| config.pwd.clone()),
        }
    }
}

impl fmt::Debug for CacheOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheOptions")
            .field("addr", &self.addr)
            .field("db", &self.db)
            .field("pool_size", &self.pool_size)
            .field("max_retries", &self.max_retries)
            .field("idle_timeout", &self.idle_timeout)
            .field("password", &self.password.as_ref().map(|_| MASK))
            .finish()
    }
}

/// Localization bundle options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOptions {
    /// Fallback language.
    pub default_language: String,
    /// Languages to load; empty means every bundle found.
    pub languages: Vec<String>,
    /// Absolute bundle directory.
    pub dir: PathBuf,
}

impl LocaleOptions {
    /// Build options, resolving the bundle directory against `conf_root`.
    pub fn new(config: &I18nConfig, conf_root: &Path) -> Self {
        Self {
            default_language: config.default_language.clone(),
            languages: config.languages.clone(),
            dir: conf_root.join(&config.dir),
        }
    }
}

/// Replacement text for secrets.
pub const MASK: &str = "********";

/// Hide the password in a `user:password@...` connection string.
///
/// # Example
///
/// ```
/// use laya::bootstrap::mask_dsn;
///
/// assert_eq!(
///     mask_dsn("app:s3cret@tcp(db:3306)/app"),
///     "app:********@tcp(db:3306)/app"
/// );
/// assert_eq!(mask_dsn("root@tcp(db:3306)/app"), "root@tcp(db:3306)/app");
/// ```
pub fn mask_dsn(dsn: &str) -> String {
    // The password is whatever sits between the first ':' and the last '@'
    // of the user-info part; URL-style DSNs carry a scheme first.
    let (scheme, rest) = match dsn.find("://") {
        Some(i) => dsn.split_at(i + 3),
        None => ("", dsn),
    };
    // User-info ends before the address: `tcp(...)` or the first path '/'
    let address = rest.find('(').or_else(|| rest.find('/')).unwrap_or(rest.len());
    let Some(at) = rest[..address].rfind('@') else {
        return dsn.to_string();
    };
    let user_info = &rest[..at];
    match user_info.find(':') {
        Some(colon) => format!(
            "{}{}:{}{}",
            scheme,
            &user_info[..colon],
            MASK,
            &rest[at..]
        ),
        None => dsn.to_string(),
    }
}

fn non_zero(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
