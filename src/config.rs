use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "::1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `<PREFIX>_HOST` and `<PREFIX>_PORT` from the process environment.
    pub fn from_env(prefix: &str, default_port: u16) -> Result<Self> {
        Self::from_lookup(prefix, default_port, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(prefix: &str, default_port: u16, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_var = format!("{prefix}_HOST");
        let port_var = format!("{prefix}_PORT");

        let host = lookup(&host_var).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(&port_var) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{port_var} must be a valid port number (0-65535)"))?,
            None => default_port,
        };

        Ok(Config { host, port })
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.host);
        tracing::info!("  Port: {}", self.port);
    }
}
