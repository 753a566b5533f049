use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8765;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

impl Config {
    /// Reads `WEBUI_HOST` / `WEBUI_PORT` (and a `.env` file if present).
    /// Unset variables keep the loopback defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env::var("WEBUI_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: env::var("WEBUI_PORT")
                    .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                    .parse()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address_is_loopback() {
        let server = ServerConfig::default();
        let addr = server.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8765);
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: DEFAULT_PORT,
        };
        assert!(server.socket_addr().is_err());
    }
}
