//! Service start-up.
//!
//! Turns the loaded config section into client options and hands them to
//! host-provided collaborators:
//! - [`ports`] - traits the host implements (database, cache, locales)
//! - [`options`] - typed options built from config sections
//! - [`runner`] - [`Bootstrap`], which runs everything in order

pub mod options;
pub mod ports;
pub mod runner;

pub use options::{mask_dsn, CacheOptions, LocaleOptions, PoolOptions, MASK};
pub use ports::{CacheClient, CacheConnector, DatabaseConnector, LocaleLoader, PingReply};
pub use runner::{load_locales, start_cache, start_database, Bootstrap, Services};
