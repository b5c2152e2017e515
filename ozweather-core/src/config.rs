use anyhow::{Context, Result};
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read from the process environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to.
    pub port: u16,

    /// Base URL of the BOM observation endpoint. When unset the primary
    /// source is disabled entirely and every fetch goes straight to the
    /// forecast fallback.
    pub bom_base_url: Option<String>,

    /// Maximum age of a cached report before it is considered stale.
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bom_base_url: None,
            cache_ttl: DEFAULT_TTL,
        }
    }
}

impl Config {
    /// Read configuration from `PORT`, `BOM_WEATHER_URL`, and
    /// `WEATHER_CACHE_TTL_SECS`. Every variable is optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let bom_base_url = lookup("BOM_WEATHER_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let cache_ttl = match lookup("WEATHER_CACHE_TTL_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("Invalid WEATHER_CACHE_TTL_SECS value: {raw}"))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TTL,
        };

        Ok(Self {
            port,
            bom_base_url,
            cache_ttl,
        })
    }
}
