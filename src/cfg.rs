use std::{
    env::var,
    net::{Ipv6Addr, SocketAddr},
    num::ParseIntError,
    sync::Arc,
};

pub type Config = Arc<Configuration>;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid unsigned 16-bit integer, got '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, serde::Deserialize)]
pub struct Configuration {
    /// The address to listen on.
    pub listen_address: SocketAddr,
    // The port to listen on.
    pub app_port: u16,
}

impl Configuration {
    /// Reads configuration from the process environment.
    pub fn new() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let listen_address = SocketAddr::from((Ipv6Addr::UNSPECIFIED, app_port));

        Ok(Arc::new(Configuration {
            listen_address,
            app_port,
        }))
    }
}
