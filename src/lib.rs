//! Laya - Process bootstrap environment.
//!
//! Laya answers the questions every service process asks at start-up:
//! where is my root directory, which run mode am I in, where do config,
//! data and logs live, what is my IP and PID. It then loads the config
//! section for the selected environment and starts the configured
//! services in order.
//!
//! # Modules
//!
//! - [`environment`] - Root path detection and process-wide settings
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`bootstrap`] - Ordered service start-up
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use laya::environment::EnvironmentSettings;
//!
//! let settings = EnvironmentSettings::new();
//! settings.set_root_path("/srv/orders").unwrap();
//! settings.set_app_name("orders");
//!
//! assert_eq!(
//!     settings.log_root_path().unwrap(),
//!     std::path::Path::new("/srv/orders/log")
//! );
//! assert_eq!(settings.app_name(), "orders");
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod ui;

pub use error::{LayaError, Result};
