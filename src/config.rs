use std::env;
use std::path::PathBuf;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    bail!("{key} is set but empty")
                }
                Some(value) => Ok(value),
                None => Ok(default.to_string()),
            }
        };

        let service_port = var("SERVICE_PORT", "3000")?
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST", "0.0.0.0")?;

        let assets_dir = PathBuf::from(var("ASSETS_DIR", "assets")?);

        Ok(Config {
            service_port,
            service_host,
            assets_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Assets directory: {}", self.assets_dir.display());
        if !self.assets_dir.is_dir() {
            tracing::warn!("  Assets directory does not exist; /assets requests will 404");
        }
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
