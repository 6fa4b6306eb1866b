//! Seams to the external services a host wires up at start-up.
//!
//! Laya does not talk to databases, caches or translation files itself.
//! Hosts implement these traits over whatever client crates they use;
//! [`Bootstrap`](super::Bootstrap) builds the options and calls them in
//! order.

use super::options::{CacheOptions, LocaleOptions, PoolOptions};

/// Opens a database connection pool.
pub trait DatabaseConnector {
    /// The pool handle handed back to the host.
    type Pool;

    /// Open a pool with the given options.
    fn connect(&self, options: &PoolOptions) -> anyhow::Result<Self::Pool>;
}

/// Reply to a cache liveness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingReply {
    /// The server answered, usually with `PONG`.
    Pong(String),
    /// The server returned a nil reply. Not an error.
    Nil,
}

/// A connected cache client.
pub trait CacheClient {
    /// Check that the server is reachable.
    fn ping(&self) -> anyhow::Result<PingReply>;
}

/// Creates cache clients.
pub trait CacheConnector {
    /// The client handed back to the host.
    type Client: CacheClient;

    /// Create a client with the given options.
    fn connect(&self, options: &CacheOptions) -> anyhow::Result<Self::Client>;
}

/// Loads localization bundles.
pub trait LocaleLoader {
    /// The loaded bundle set handed back to the host.
    type Bundle;

    /// Load bundles described by the given options.
    fn load(&self, options: &LocaleOptions) -> anyhow::Result<Self::Bundle>;
}
