use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `RESERVE_*` variables; call after `dotenvy::dotenv()`.
    pub fn from_env() -> anyhow::Result<Self> {
        let db_path = std::env::var("RESERVE_DB_PATH").unwrap_or_else(|_| "database.db".into());
        let host = std::env::var("RESERVE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("RESERVE_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .context("RESERVE_PORT must be a port number")?;

        Ok(Self {
            db_path: PathBuf::from(db_path),
            host,
            port,
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))?;
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let config = Config { db_path: "database.db".into(), host: "127.0.0.1".into(), port: 8080 };
        assert_eq!(config.listen_addr().unwrap(), SocketAddr::from(([127, 0, 0, 1], 8080)));

        let config = Config { host: "not a host".into(), ..config };
        assert!(config.listen_addr().is_err());
    }
}
