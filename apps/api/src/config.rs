use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::generation::tone::ToneFallback;

pub const DEFAULT_STORE_PATH: &str = "marketing_data.json";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub tone_fallback: ToneFallback,
    /// Seeds the tone-fallback RNG so random picks repeat across runs.
    pub tone_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            store_path: var("EXAMPLE_STORE_PATH")
                .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
                .into(),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            tone_fallback: match var("TONE_FALLBACK") {
                Some(raw) => raw
                    .parse::<ToneFallback>()
                    .map_err(anyhow::Error::msg)
                    .context("TONE_FALLBACK is invalid")?,
                None => ToneFallback::default(),
            },
            tone_seed: var("TONE_SEED")
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("TONE_SEED must be an unsigned integer")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.tone_fallback, ToneFallback::Random);
        assert!(config.tone_seed.is_none());
    }

    #[test]
    fn test_overrides_are_read() {
        let config = config(&[
            ("EXAMPLE_STORE_PATH", "/var/lib/copydesk/store.json"),
            ("PORT", "9000"),
            ("TONE_FALLBACK", "first"),
            ("TONE_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/var/lib/copydesk/store.json"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.tone_fallback, ToneFallback::First);
        assert_eq!(config.tone_seed, Some(42));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("TONE_FALLBACK", "sometimes")]).is_err());
        assert!(config(&[("TONE_SEED", "-1")]).is_err());
    }
}
