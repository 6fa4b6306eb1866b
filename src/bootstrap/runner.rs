//! Ordered service start-up.
//!
//! [`Bootstrap::run`] performs, in order:
//! 1. Load and validate the selected config section
//! 2. Open the database pool (when `database.open`)
//! 3. Connect and ping the cache (when `cache.open`)
//! 4. Load localization bundles

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::options::{CacheOptions, LocaleOptions, PoolOptions};
use super::ports::{CacheClient, CacheConnector, DatabaseConnector, LocaleLoader, PingReply};
use crate::config::{load_app_config, validate, AppConfig, ConfigPaths, DEFAULT_ENV};
use crate::environment::EnvironmentSettings;
use crate::error::{LayaError, Result};

/// Everything a host gets back from a successful start-up.
#[derive(Debug)]
pub struct Services<P, C, B> {
    /// The environment section that was loaded.
    pub env: String,
    /// The loaded settings.
    pub config: AppConfig,
    /// Database pool, if the database is open.
    pub database: Option<P>,
    /// Cache client, if the cache is open.
    pub cache: Option<C>,
    /// Localization bundles.
    pub locales: B,
}

/// Start-up driver for one process.
///
/// # Example
///
/// ```no_run
/// use laya::bootstrap::Bootstrap;
/// use laya::environment::global;
/// # use laya::bootstrap::{CacheClient, CacheConnector, CacheOptions, DatabaseConnector,
/// #     LocaleLoader, LocaleOptions, PingReply, PoolOptions};
/// # struct Db; struct Cache; struct Client; struct Locales;
/// # impl DatabaseConnector for Db { type Pool = (); fn connect(&self, _: &PoolOptions) -> anyhow::Result<()> { Ok(()) } }
/// # impl CacheClient for Client { fn ping(&self) -> anyhow::Result<PingReply> { Ok(PingReply::Nil) } }
/// # impl CacheConnector for Cache { type Client = Client; fn connect(&self, _: &CacheOptions) -> anyhow::Result<Client> { Ok(Client) } }
/// # impl LocaleLoader for Locales { type Bundle = (); fn load(&self, _: &LocaleOptions) -> anyhow::Result<()> { Ok(()) } }
///
/// let services = Bootstrap::new(global())
///     .with_env("prod")
///     .run(&Db, &Cache, &Locales)?;
/// println!("connected to {}", services.config.delay_server);
/// # Ok::<(), laya::LayaError>(())
/// ```
#[derive(Debug)]
pub struct Bootstrap<'a> {
    settings: &'a EnvironmentSettings,
    env: String,
    config_file: Option<PathBuf>,
}

impl<'a> Bootstrap<'a> {
    /// Create a bootstrap for the `dev` environment.
    pub fn new(settings: &'a EnvironmentSettings) -> Self {
        Self {
            settings,
            env: DEFAULT_ENV.to_string(),
            config_file: None,
        }
    }

    /// Select the config environment section. Empty keeps the default.
    pub fn with_env(mut self, env: &str) -> Self {
        if !env.is_empty() {
            self.env = env.to_string();
        }
        self
    }

    /// Load this file instead of `<conf root>/config.yaml`.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// The selected environment section.
    pub fn env(&self) -> &str {
        &self.env
    }

    /// Where the config file is expected.
    pub fn config_paths(&self) -> Result<ConfigPaths> {
        ConfigPaths::with_override(self.settings, self.config_file.as_deref())
    }

    /// Load and validate the selected section.
    pub fn load_config(&self) -> Result<AppConfig> {
        let paths = self.config_paths()?;
        info!(path = %paths.file.display(), env = %self.env, "loading config");
        let config = load_app_config(&paths.file, &self.env)?;
        validate(&config)?;
        Ok(config)
    }

    /// Load config and start every configured service.
    ///
    /// # Errors
    ///
    /// Config errors are returned as-is. A collaborator failure is returned
    /// as [`LayaError::ServiceInit`], which is fatal.
    pub fn run<D, C, L>(
        &self,
        database: &D,
        cache: &C,
        locales: &L,
    ) -> Result<Services<D::Pool, C::Client, L::Bundle>>
    where
        D: DatabaseConnector,
        C: CacheConnector,
        L: LocaleLoader,
    {
        let config = self.load_config()?;
        let conf_root = self.settings.conf_root_path()?;

        let database = start_database(&config, database)?;
        let cache = start_cache(&config, cache)?;
        let locales = load_locales(&config, &conf_root, locales)?;

        Ok(Services {
            env: self.env.clone(),
            config,
            database,
            cache,
            locales,
        })
    }
}

/// Open the database pool if the section enables it.
pub fn start_database<D>(config: &AppConfig, connector: &D) -> Result<Option<D::Pool>>
where
    D: DatabaseConnector,
{
    if !config.database.open {
        debug!("database disabled");
        return Ok(None);
    }

    let options = PoolOptions::from(&config.database);
    let pool = connector
        .connect(&options)
        .map_err(|source| LayaError::ServiceInit {
            service: "database",
            source,
        })?;
    info!(
        max_idle = options.max_idle,
        max_open = options.max_open,
        "database pool ready"
    );
    Ok(Some(pool))
}

/// Connect and ping the cache if the section enables it.
///
/// A nil ping reply is accepted.
pub fn start_cache<C>(config: &AppConfig, connector: &C) -> Result<Option<C::Client>>
where
    C: CacheConnector,
{
    if !config.cache.open {
        debug!("cache disabled");
        return Ok(None);
    }

    let options = CacheOptions::from(&config.cache);
    let client = connector
        .connect(&options)
        .map_err(|source| LayaError::ServiceInit {
            service: "cache",
            source,
        })?;

    match client.ping() {
        Ok(PingReply::Pong(reply)) => info!(addr = %options.addr, %reply, "cache ready"),
        Ok(PingReply::Nil) => info!(addr = %options.addr, "cache returned nil reply to ping"),
        Err(source) => {
            return Err(LayaError::ServiceInit {
                service: "cache",
                source,
            })
        }
    }
    Ok(Some(client))
}

/// Load localization bundles. Always runs.
pub fn load_locales<L>(config: &AppConfig, conf_root: &Path, loader: &L) -> Result<L::Bundle>
where
    L: LocaleLoader,
{
    let options = LocaleOptions::new(&config.i18n, conf_root);
    debug!(dir = %options.dir.display(), language = %options.default_language, "loading locales");
    loader.load(&options).map_err(|source| LayaError::ServiceInit {
        service: "locales",
        source,
    })
}
