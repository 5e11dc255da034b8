//! Cache connection probe. The cache holds no data for this site yet; readiness only
//! checks that it answers.

use crate::error::AppError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[async_trait]
pub trait CacheProbe: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
}

/// Sends `PING` through a `redis::Client` and expects `PONG`. Accepts any URL the
/// client does (`redis://`, `rediss://`, `redis+unix://`), credentials included.
#[derive(Clone, Debug)]
pub struct RedisProbe {
    client: redis::Client,
    timeout: Duration,
}

impl RedisProbe {
    pub fn from_url(url: &str) -> Result<Self, AppError> {
        let client = redis::Client::open(url).map_err(|e| AppError::Cache(format!("invalid REDIS_URL: {e}")))?;
        Ok(RedisProbe {
            client,
            timeout: PROBE_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn exchange(&self) -> Result<(), AppError> {
        let cache_err = |e: redis::RedisError| AppError::Cache(e.to_string());
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(cache_err)?;
        let reply: String = redis::cmd("PING").query_async(&mut conn).await.map_err(cache_err)?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(AppError::Cache(format!("unexpected reply: {reply}")))
        }
    }
}

#[async_trait]
impl CacheProbe for RedisProbe {
    async fn ping(&self) -> Result<(), AppError> {
        timeout(self.timeout, self.exchange())
            .await
            .map_err(|_| AppError::Cache("ping timed out".into()))?
    }
}
