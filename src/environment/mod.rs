//! Environment detection and resolution.
//!
//! Determines where the application lives and how it is running. The root
//! path priority chain is:
//!
//! 1. Explicit [`EnvironmentSettings::set_root_path`] (or `--root`)
//! 2. `LAYA_ROOT_PATH`
//! 3. Auto-detection relative to the executable
//!
//! Config, data and log directories are always derived from the root path.

pub mod detection;
pub mod network;
pub mod resolver;
pub mod settings;

pub use detection::{DetectedRoot, DetectionRule, RootPathDetector, CONFIG_MARKER};
pub use network::{first_usable_ipv4, probe_local_ipv4, UNKNOWN_IP};
pub use resolver::{EnvOverride, Resolved, ValueSource};
pub use settings::{
    global, EnvironmentSettings, DATA_DIR_NAME, DEFAULT_APP_NAME, DEFAULT_CONF_DIR_NAME,
    DEFAULT_RUN_MODE, LOG_DIR_NAME, ROOT_PATH_ENV, RUN_MODE_ENV,
};
