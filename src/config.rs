//! Runtime configuration read from the environment (and `.env`).

use std::env;
use thiserror::Error;

use crate::terbilang::AngkaPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AKTA_PORT '{0}' bukan nomor port yang valid")]
    InvalidPort(String),
    #[error("AKTA_ANGKA_POLICY: {0}")]
    InvalidPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// What to do with amounts that cannot be spelled out.
    pub angka_policy: AngkaPolicy,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            angka_policy: AngkaPolicy::default(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// Read `AKTA_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("AKTA_HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("AKTA_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(policy) = lookup("AKTA_ANGKA_POLICY") {
            config.angka_policy = policy.parse().map_err(ConfigError::InvalidPolicy)?;
        }

        if let Some(origins) = lookup("AKTA_ALLOWED_ORIGINS") {
            let parsed: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                config.allowed_origins = parsed;
            }
        } else {
            log::debug!("AKTA_ALLOWED_ORIGINS not set, allowing local development origins");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.angka_policy, AngkaPolicy::Sentinel);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AKTA_HOST", "127.0.0.1"),
            ("AKTA_PORT", "9000"),
            ("AKTA_ANGKA_POLICY", "strict"),
            ("AKTA_ALLOWED_ORIGINS", "https://notaris.example, https://admin.example"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.angka_policy, AngkaPolicy::Strict);
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("AKTA_PORT", "delapan")])),
            Err(ConfigError::InvalidPort("delapan".to_string()))
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("AKTA_ANGKA_POLICY", "lenient")])),
            Err(ConfigError::InvalidPolicy(_))
        ));
    }
}
