//! Process-wide environment settings.
//!
//! [`EnvironmentSettings`] holds every value the rest of the process
//! resolves relative to: the root path, run mode, app name, config
//! directory name, local IP and PID. Each value is resolved on first read
//! and cached for the lifetime of the settings object.
//!
//! Hosts normally share one instance through [`global`]; tests build their
//! own with injected lookups.

use std::env::VarError;
use std::fmt;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use tracing::debug;

use super::detection::{DetectedRoot, RootPathDetector};
use super::network::{probe_local_ipv4, UNKNOWN_IP};
use super::resolver::{Resolved, ValueSource};
use crate::error::{LayaError, Result};

/// Environment variable overriding the root path.
pub const ROOT_PATH_ENV: &str = "LAYA_ROOT_PATH";

/// Environment variable overriding the run mode.
pub const RUN_MODE_ENV: &str = "LAYA_RUN_MODE";

/// Run mode used when none is set.
pub const DEFAULT_RUN_MODE: &str = "debug";

/// App name used when none is set.
pub const DEFAULT_APP_NAME: &str = "unknown";

/// Config directory name used when none is set.
pub const DEFAULT_CONF_DIR_NAME: &str = "config";

/// Data directory name under the root path.
pub const DATA_DIR_NAME: &str = "data";

/// Log directory name under the root path.
pub const LOG_DIR_NAME: &str = "log";

type EnvLookup = Box<dyn Fn(&str) -> std::result::Result<String, VarError> + Send + Sync>;
type RootDetect = Box<dyn Fn() -> Result<DetectedRoot> + Send + Sync>;
type IpProbe = Box<dyn Fn() -> Option<Ipv4Addr> + Send + Sync>;
type Label = RwLock<Option<Resolved<String>>>;

/// The process-wide settings instance.
pub fn global() -> &'static EnvironmentSettings {
    static GLOBAL: OnceLock<EnvironmentSettings> = OnceLock::new();
    GLOBAL.get_or_init(EnvironmentSettings::new)
}

/// Lazily resolved, cached environment settings.
///
/// # Example
///
/// ```
/// use laya::environment::EnvironmentSettings;
/// use std::path::Path;
///
/// let settings = EnvironmentSettings::new();
/// settings.set_root_path("/srv/app").unwrap();
///
/// assert_eq!(settings.root_path().unwrap(), Path::new("/srv/app"));
/// assert_eq!(settings.conf_root_path().unwrap(), Path::new("/srv/app/config"));
/// assert_eq!(settings.log_root_path().unwrap(), Path::new("/srv/app/log"));
///
/// // Setting the same value again is fine, a different one is not
/// assert!(settings.set_root_path("/srv/app").is_ok());
/// assert!(settings.set_root_path("/opt/app").is_err());
/// ```
pub struct EnvironmentSettings {
    env_fn: EnvLookup,
    detect_fn: RootDetect,
    ip_probe: IpProbe,
    root: OnceLock<Resolved<PathBuf>>,
    /// Serializes root path resolution so concurrent first reads detect once.
    root_guard: Mutex<()>,
    run_mode: Label,
    app_name: Label,
    conf_dir_name: Label,
    local_ip: OnceLock<String>,
    pid: OnceLock<(u32, String)>,
}

impl EnvironmentSettings {
    /// Create settings backed by the real process environment.
    pub fn new() -> Self {
        Self {
            env_fn: Box::new(|key: &str| std::env::var(key)),
            detect_fn: Box::new(|| RootPathDetector::new().detect()),
            ip_probe: Box::new(probe_local_ipv4),
            root: OnceLock::new(),
            root_guard: Mutex::new(()),
            run_mode: RwLock::new(None),
            app_name: RwLock::new(None),
            conf_dir_name: RwLock::new(None),
            local_ip: OnceLock::new(),
            pid: OnceLock::new(),
        }
    }

    /// Use a custom environment variable lookup (for testing).
    pub fn with_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError> + Send + Sync + 'static,
    {
        self.env_fn = Box::new(env_fn);
        self
    }

    /// Use a custom root path detector (for testing).
    pub fn with_detector<F>(mut self, detect_fn: F) -> Self
    where
        F: Fn() -> Result<DetectedRoot> + Send + Sync + 'static,
    {
        self.detect_fn = Box::new(detect_fn);
        self
    }

    /// Use a custom network interface probe (for testing).
    pub fn with_ip_probe<F>(mut self, ip_probe: F) -> Self
    where
        F: Fn() -> Option<Ipv4Addr> + Send + Sync + 'static,
    {
        self.ip_probe = Box::new(ip_probe);
        self
    }

    /// Fix the root path.
    ///
    /// The root path can be set once. Setting the identical path again is
    /// a no-op; an empty path while nothing is set is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LayaError::RootPathConflict`] when a different root path is
    /// already in place. This is fatal: the host should exit.
    pub fn set_root_path(&self, path: impl Into<PathBuf>) -> Result<()> {
        let requested = path.into();

        if requested.as_os_str().is_empty() {
            return match self.root.get() {
                Some(current) => Err(conflict(&current.value, requested)),
                None => Ok(()),
            };
        }

        let current = self.root.get_or_init(|| Resolved::explicit(requested.clone()));
        if current.value != requested {
            return Err(conflict(&current.value, requested));
        }
        Ok(())
    }

    /// The application root path.
    ///
    /// Resolved on first call from, in order: an explicit
    /// [`set_root_path`](Self::set_root_path), `LAYA_ROOT_PATH`, then
    /// auto-detection. The result is fixed afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`LayaError::WorkingDirUnavailable`] when detection cannot
    /// read the working directory. This is fatal: the host should exit.
    pub fn root_path(&self) -> Result<&Path> {
        if let Some(resolved) = self.root.get() {
            return Ok(&resolved.value);
        }

        let _guard = self.root_guard.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(resolved) = self.root.get() {
            return Ok(&resolved.value);
        }

        let env_value = self.env_value(ROOT_PATH_ENV);
        let resolved = Resolved::<PathBuf>::resolve_root(
            None,
            env_value.as_deref().map(|v| (ROOT_PATH_ENV, v)),
            || (self.detect_fn)(),
        )?;
        debug!(
            root = %resolved.value.display(),
            source = %resolved.source,
            "resolved root path"
        );

        // An explicit set that raced this resolution wins
        Ok(&self.root.get_or_init(|| resolved).value)
    }

    /// How the root path was determined, if it has been resolved.
    pub fn root_path_source(&self) -> Option<ValueSource> {
        self.root.get().map(|r| r.source.clone())
    }

    /// Set the run mode. May be called any number of times.
    ///
    /// An empty mode clears it so the next read resolves again.
    pub fn set_run_mode(&self, mode: &str) {
        set_label(&self.run_mode, mode);
    }

    /// The run mode: explicit set, then `LAYA_RUN_MODE`, then `"debug"`.
    pub fn run_mode(&self) -> String {
        self.resolved_run_mode().value
    }

    /// How the run mode was determined.
    pub fn run_mode_source(&self) -> ValueSource {
        self.resolved_run_mode().source
    }

    fn resolved_run_mode(&self) -> Resolved<String> {
        resolve_label(&self.run_mode, || {
            let env_value = self.env_value(RUN_MODE_ENV);
            Resolved::<String>::resolve_label(
                None,
                env_value.as_deref().map(|v| (RUN_MODE_ENV, v)),
                DEFAULT_RUN_MODE,
            )
        })
    }

    /// Set the application name.
    pub fn set_app_name(&self, name: &str) {
        set_label(&self.app_name, name);
    }

    /// The application name, `"unknown"` unless set.
    pub fn app_name(&self) -> String {
        resolve_label(&self.app_name, || {
            Resolved::<String>::resolve_label(None, None, DEFAULT_APP_NAME)
        })
        .value
    }

    /// Set the config directory name (relative to the root path).
    pub fn set_conf_dir_name(&self, name: &str) {
        set_label(&self.conf_dir_name, name);
    }

    /// The config directory name, `"config"` unless set.
    pub fn conf_dir_name(&self) -> String {
        resolve_label(&self.conf_dir_name, || {
            Resolved::<String>::resolve_label(None, None, DEFAULT_CONF_DIR_NAME)
        })
        .value
    }

    /// `<root>/<conf dir name>`.
    pub fn conf_root_path(&self) -> Result<PathBuf> {
        Ok(self.root_path()?.join(self.conf_dir_name()))
    }

    /// `<root>/data`.
    pub fn data_root_path(&self) -> Result<PathBuf> {
        Ok(self.root_path()?.join(DATA_DIR_NAME))
    }

    /// `<root>/log`.
    pub fn log_root_path(&self) -> Result<PathBuf> {
        Ok(self.root_path()?.join(LOG_DIR_NAME))
    }

    /// This host's IPv4 address, or `"unknown"`.
    ///
    /// Interfaces are enumerated on the first call only; later network
    /// changes are not picked up.
    pub fn local_ip(&self) -> &str {
        self.local_ip.get_or_init(|| match (self.ip_probe)() {
            Some(ip) => ip.to_string(),
            None => UNKNOWN_IP.to_string(),
        })
    }

    /// The current process identifier.
    pub fn pid(&self) -> u32 {
        self.pid_entry().0
    }

    /// The current process identifier in decimal.
    pub fn pid_string(&self) -> &str {
        &self.pid_entry().1
    }

    fn pid_entry(&self) -> &(u32, String) {
        self.pid.get_or_init(|| {
            let pid = std::process::id();
            (pid, pid.to_string())
        })
    }

    /// Drop every cached value so the next reads resolve again.
    pub fn reset(&mut self) {
        self.root.take();
        self.local_ip.take();
        self.pid.take();
        for label in [
            &mut self.run_mode,
            &mut self.app_name,
            &mut self.conf_dir_name,
        ] {
            *label.get_mut().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }

    /// Non-empty value of an environment variable.
    fn env_value(&self, key: &str) -> Option<String> {
        (self.env_fn)(key).ok().filter(|v| !v.is_empty())
    }
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvironmentSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentSettings")
            .field("root", &self.root.get())
            .field("local_ip", &self.local_ip.get())
            .field("pid", &self.pid.get().map(|(pid, _)| pid))
            .finish_non_exhaustive()
    }
}

fn conflict(current: &Path, requested: PathBuf) -> LayaError {
    LayaError::RootPathConflict {
        current: current.to_path_buf(),
        requested,
    }
}

fn set_label(slot: &Label, value: &str) {
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    *guard = if value.is_empty() {
        None
    } else {
        Some(Resolved::explicit(value.to_string()))
    };
}

fn resolve_label<F>(slot: &Label, resolve: F) -> Resolved<String>
where
    F: FnOnce() -> Resolved<String>,
{
    if let Some(resolved) = slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return resolved.clone();
    }
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    guard.get_or_insert_with(resolve).clone()
}
