//! Configuration schema definitions.
//!
//! These structs map to one environment section of `config.yaml`:
//!
//! ```yaml
//! dev:
//!   database:
//!     open: true
//!     dsn: "app:secret@tcp(127.0.0.1:3306)/app"
//!     maxIdleConn: 10
//!     maxOpenConn: 50
//!     connMaxLifetime: 1
//!   cache:
//!     open: true
//!     addr: "127.0.0.1:6379"
//!     poolSize: 20
//!   i18n:
//!     defaultLanguage: en
//!     languages: [en, zh]
//!   delayServer: "http://127.0.0.1:9278"
//! ```

use serde::{Deserialize, Serialize};

/// Delay server address used when a section does not name one.
pub const DEFAULT_DELAY_SERVER: &str = "http://127.0.0.1:9278";

/// Settings for one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Relational database connection pool
    pub database: DatabaseConfig,

    /// Cache server connection
    pub cache: CacheConfig,

    /// Localization bundles
    pub i18n: I18nConfig,

    /// Base URL of the delayed-job server
    pub delay_server: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            i18n: I18nConfig::default(),
            delay_server: DEFAULT_DELAY_SERVER.to_string(),
        }
    }
}

/// Database pool settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// Connect at start-up
    pub open: bool,

    /// Driver connection string
    pub dsn: String,

    /// Idle connections kept in the pool (0 = driver default)
    pub max_idle_conn: u32,

    /// Open connection cap (0 = unlimited)
    pub max_open_conn: u32,

    /// Connection lifetime in hours (0 = unlimited)
    pub conn_max_lifetime: u64,
}

/// Cache server settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    /// Connect at start-up
    pub open: bool,

    /// `host:port`
    pub addr: String,

    /// Logical database index
    pub db: u32,

    /// Connection pool size (0 = client default)
    pub pool_size: u32,

    /// Retries per command
    pub max_retries: u32,

    /// Idle connection timeout in seconds (0 = never)
    pub idle_timeout: u64,

    /// Password, empty for none
    pub pwd: String,
}

/// Localization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nConfig {
    /// Language used when a request names none
    pub default_language: String,

    /// Languages to load; empty loads whatever bundles exist
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    /// Bundle directory, relative to the config root
    pub dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            languages: Vec::new(),
            dir: "i18n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.delay_server, DEFAULT_DELAY_SERVER);
        assert!(!config.database.open);
        assert!(!config.cache.open);
        assert_eq!(config.i18n.default_language, "en");
        assert_eq!(config.i18n.dir, "i18n");
    }

    #[test]
    fn parses_camel_case_fields() {
        let yaml = r#"
database:
  open: true
  dsn: "root@tcp(localhost:3306)/app"
  maxIdleConn: 5
  maxOpenConn: 20
  connMaxLifetime: 2
cache:
  open: true
  addr: "localhost:6379"
  db: 3
  poolSize: 8
  maxRetries: 2
  idleTimeout: 300
  pwd: hunter2
i18n:
  defaultLanguage: zh
  languages: [zh, en]
  dir: lang
delayServer: "http://delay:9000"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.database.open);
        assert_eq!(config.database.max_idle_conn, 5);
        assert_eq!(config.database.max_open_conn, 20);
        assert_eq!(config.database.conn_max_lifetime, 2);
        assert_eq!(config.cache.db, 3);
        assert_eq!(config.cache.pool_size, 8);
        assert_eq!(config.cache.max_retries, 2);
        assert_eq!(config.cache.idle_timeout, 300);
        assert_eq!(config.cache.pwd, "hunter2");
        assert_eq!(config.i18n.languages, vec!["zh", "en"]);
        assert_eq!(config.i18n.dir, "lang");
        assert_eq!(config.delay_server, "http://delay:9000");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = "cache:\n  addr: \"cache:6379\"\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.cache.addr, "cache:6379");
        assert!(!config.cache.open);
        assert_eq!(config.database, DatabaseConfig::default());
        assert_eq!(config.delay_server, DEFAULT_DELAY_SERVER);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let yaml = serde_yaml::to_string(&AppConfig::default()).unwrap();
        assert!(yaml.contains("delayServer"));
        assert!(yaml.contains("maxIdleConn"));
        assert!(!yaml.contains("languages"));
    }
}
