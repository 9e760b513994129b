//! Server configuration read from the environment.

use std::env;

use tracing::warn;

/// Port used when `EDUTRACK_PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_addr: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Whether to install the example records at startup.
    pub seed_example_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_owned(),
            port: DEFAULT_PORT,
            seed_example_data: false,
        }
    }
}

impl ServerConfig {
    /// Read configuration from `EDUTRACK_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        let bind_addr = env::var("EDUTRACK_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_owned());
        let port = match env::var("EDUTRACK_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "EDUTRACK_PORT is not a valid port, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let seed_example_data =
            env::var("EDUTRACK_SEED_EXAMPLE_DATA").ok().as_deref() == Some("1");
        Self {
            bind_addr,
            port,
            seed_example_data,
        }
    }
}
