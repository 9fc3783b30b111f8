// Configuration module
// Reads the listen port from the process environment

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `PORT` selects the TCP port and defaults to 3000 when unset.
    /// A value that does not parse as a valid port is a fatal startup error.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("port", 3000)?
            .build()?;

        settings.try_deserialize()
    }

    /// Listen address: all interfaces at the configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
