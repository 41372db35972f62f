//! Server configuration read from the environment.
//!
//! ## Environment Variables
//! - `CLIP_SERVER_URL` - base URL of the clipping server (default: `http://109.199.102.132:9000`)
//! - `HOST` - interface to bind (default: `0.0.0.0`)
//! - `PORT` - port to listen on (default: `3000`)

use crate::constants::DEFAULT_CLIP_SERVER_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub clip_server_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clip_server_url: DEFAULT_CLIP_SERVER_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", raw, e))?,
            None => defaults.port,
        };

        Ok(Self {
            clip_server_url: get("CLIP_SERVER_URL").unwrap_or(defaults.clip_server_url),
            host: get("HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CLIP_SERVER_URL", "http://clipper.internal:9000"),
            ("PORT", "8080"),
            ("HOST", ""),
        ]))
        .unwrap();
        assert_eq!(config.clip_server_url, "http://clipper.internal:9000");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
    }
}
