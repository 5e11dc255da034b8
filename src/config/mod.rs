//! Site configuration loaded from the process environment (and an optional `.env`).

mod loader;

pub use loader::{from_lookup, load_from_env};

use std::time::Duration;

/// Runtime environment. Only `development` changes behavior (logging, store verbosity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Other(String),
}

impl AppEnv {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => AppEnv::Development,
            "production" | "prod" => AppEnv::Production,
            other => AppEnv::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
            AppEnv::Other(s) => s,
        }
    }
}

/// Connection pool limits handed to `PgPoolOptions`.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_connections: 25,
            min_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            max_lifetime: Duration::from_secs(300),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub app_env: AppEnv,
    pub app_url: String,
    pub app_port: u16,
    pub database_url: String,
    /// Cache connection; only probed by readiness.
    pub redis_url: String,
    pub pool: PoolConfig,
    pub static_dir: String,
}

impl SiteConfig {
    pub fn is_development(&self) -> bool {
        self.app_env == AppEnv::Development
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.app_port)
    }
}
