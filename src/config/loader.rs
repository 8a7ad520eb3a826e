//! Load server configuration from the process environment (optionally seeded from `.env`).

use crate::config::types::*;
use crate::error::ConfigError;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";
pub const INIT_SCHEMA_VAR: &str = "VULGATE_INIT_SCHEMA";

/// Read `.env` if present, then build config from the environment.
pub fn load() -> Result<ServerConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    from_env()
}

pub fn from_env() -> Result<ServerConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary variable lookup. Unset or blank variables take their defaults.
pub fn from_lookup<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = ServerConfig::default();

    if let Some(url) = get(DATABASE_URL_VAR) {
        config.database_url = url;
    }
    if let Some(addr) = get(BIND_ADDR_VAR) {
        config.bind_addr = addr;
    }
    if let Some(raw) = get(MAX_CONNECTIONS_VAR) {
        let n: u32 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: MAX_CONNECTIONS_VAR,
            value: raw.clone(),
        })?;
        if n == 0 {
            return Err(ConfigError::ZeroPoolSize { var: MAX_CONNECTIONS_VAR });
        }
        config.max_connections = n;
    }
    if let Some(raw) = get(INIT_SCHEMA_VAR) {
        config.init_schema = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
            var: INIT_SCHEMA_VAR,
            value: raw,
        })?;
    }
    Ok(config)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.database_url, "sqlite://v.db");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(!config.init_schema);
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:///data/vulgate.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("VULGATE_INIT_SCHEMA", "Yes"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite:///data/vulgate.db");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.max_connections, 12);
        assert!(config.init_schema);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = from_lookup(lookup_from(&[("BIND_ADDR", "  ")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn non_numeric_pool_size_is_rejected() {
        let err = from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "DATABASE_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPoolSize { .. }));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = from_lookup(lookup_from(&[("VULGATE_INIT_SCHEMA", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "VULGATE_INIT_SCHEMA", .. }));
    }
}
