use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub host: String,
    pub port: u16,
    pub riot_timeout: Duration,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const DEFAULT_HOST: &str = "0.0.0.0";
        const DEFAULT_PORT: u16 = 8000;
        const DEFAULT_RIOT_TIMEOUT_SECS: u64 = 10;
        const DEFAULT_ASSETS_DIR: &str = "assets";

        let riot_api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let riot_timeout_secs = lookup("RIOT_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_RIOT_TIMEOUT_SECS);

        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        Ok(Self {
            riot_api_key,
            host,
            port,
            riot_timeout: Duration::from_secs(riot_timeout_secs),
            assets_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
