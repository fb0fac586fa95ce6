// Server settings, read from the environment (and .env through dotenvy in main)

use crate::models::{RangeError, SamplingRange, DEFAULT_MAX_DISTANCE_KM, DEFAULT_STEP_KM};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid sampling range: {0}")]
    Range(#[from] RangeError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Range used by `/api/compare` when the request does not carry one.
    pub default_range: SamplingRange,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let max_distance_km = parse_or(&lookup, "COST_MAX_DISTANCE_KM", DEFAULT_MAX_DISTANCE_KM)?;
        let step_km = parse_or(&lookup, "COST_STEP_KM", DEFAULT_STEP_KM)?;

        Ok(AppConfig {
            host,
            port,
            default_range: SamplingRange::new(max_distance_km, step_km)?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.default_range, SamplingRange::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("COST_MAX_DISTANCE_KM", "300000"),
            ("COST_STEP_KM", "1000"),
        ]))
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:3000");
        assert_eq!(config.default_range.sample_count(), 301);
    }

    #[test]
    fn test_bad_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_oversized_range_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("COST_MAX_DISTANCE_KM", "10000000"),
            ("COST_STEP_KM", "1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Range(RangeError::TooManySamples { .. })));
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("COST_STEP_KM", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Range(RangeError::ZeroStep)));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("PORT", "9191");
        let config = AppConfig::from_env();
        std::env::remove_var("PORT");
        assert_eq!(config.unwrap().port, 9191);
    }
}
