//! Service configuration, read once from the environment at startup.

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the upstream API. `None` when unset or empty.
    pub api_key: Option<String>,
    /// Root of the OpenAI-compatible API, without a trailing slash.
    pub base_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
        })
    }

    /// `host:port`, resolved by the listener so hostnames work too.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn bind_addr_keeps_hostnames() {
        let config = Config {
            host: "localhost".into(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.bind_addr(), "localhost:8080");
    }
}
