//! Environment parsing. `from_lookup` takes any key lookup so tests need not touch process env.

use super::{AppEnv, PoolConfig, SiteConfig};
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Load `.env` if present, then read the process environment.
pub fn load_from_env() -> Result<SiteConfig, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to read .env file");
        }
    }
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup<F>(lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

    let defaults = PoolConfig::default();
    let pool = PoolConfig {
        max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        min_connections: parse_or(&get, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
        acquire_timeout: Duration::from_secs(parse_or(
            &get,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )?),
        max_lifetime: Duration::from_secs(parse_or(
            &get,
            "DB_MAX_LIFETIME_SECS",
            defaults.max_lifetime.as_secs(),
        )?),
    };
    if pool.min_connections > pool.max_connections {
        return Err(ConfigError::Invalid {
            key: "DB_MIN_CONNECTIONS",
            value: pool.min_connections.to_string(),
        });
    }

    Ok(SiteConfig {
        app_env: AppEnv::parse(&get("APP_ENV").unwrap_or_else(|| "development".into())),
        app_url: get("APP_URL").unwrap_or_else(|| "http://localhost:3000".into()),
        app_port: parse_or(&get, "APP_PORT", 3000)?,
        database_url: required("DATABASE_URL")?,
        redis_url: required("REDIS_URL")?,
        pool,
        static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".into()),
    })
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn load(vars: &HashMap<String, String>) -> Result<SiteConfig, ConfigError> {
        from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_only_required_vars_set() {
        let vars = env(&[("DATABASE_URL", "postgres://db/site"), ("REDIS_URL", "redis://cache:6379")]);
        let cfg = load(&vars).unwrap();
        assert!(cfg.is_development());
        assert_eq!(cfg.app_port, 3000);
        assert_eq!(cfg.app_url, "http://localhost:3000");
        assert_eq!(cfg.pool.max_connections, 25);
        assert_eq!(cfg.pool.acquire_timeout, Duration::from_secs(5));
        assert_eq!(cfg.static_dir, "static");
        assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn database_url_is_required() {
        let vars = env(&[("REDIS_URL", "redis://cache:6379")]);
        assert!(matches!(load(&vars), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn blank_redis_url_counts_as_missing() {
        let vars = env(&[("DATABASE_URL", "postgres://db/site"), ("REDIS_URL", "  ")]);
        assert!(matches!(load(&vars), Err(ConfigError::Missing("REDIS_URL"))));
    }

    #[test]
    fn bad_port_is_reported_with_key() {
        let vars = env(&[
            ("DATABASE_URL", "postgres://db/site"),
            ("REDIS_URL", "redis://cache:6379"),
            ("APP_PORT", "eighty"),
        ]);
        match load(&vars) {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "APP_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn production_env_is_not_development() {
        let vars = env(&[
            ("DATABASE_URL", "postgres://db/site"),
            ("REDIS_URL", "redis://cache:6379"),
            ("APP_ENV", "Production"),
        ]);
        let cfg = load(&vars).unwrap();
        assert_eq!(cfg.app_env, AppEnv::Production);
        assert!(!cfg.is_development());
    }

    #[test]
    fn min_connections_cannot_exceed_max() {
        let vars = env(&[
            ("DATABASE_URL", "postgres://db/site"),
            ("REDIS_URL", "redis://cache:6379"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "4"),
        ]);
        assert!(matches!(load(&vars), Err(ConfigError::Invalid { key: "DB_MIN_CONNECTIONS", .. })));
    }
}
