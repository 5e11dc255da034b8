//! PostgreSQL-backed `RecordStore`.

use super::RecordStore;
use crate::config::SiteConfig;
use crate::error::AppError;
use crate::model::{Event, Ministry, Record, SiteSetting, StaffMember};
use crate::sql::{build_select, Select, SqlValue};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

/// Open the shared pool. Callers wait up to `acquire_timeout` for a connection, then fail.
pub async fn connect(config: &SiteConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .acquire_timeout(config.pool.acquire_timeout)
        .max_lifetime(config.pool.max_lifetime)
        .connect(&config.database_url)
        .await?;
    tracing::info!(
        max_connections = config.pool.max_connections,
        "connected to PostgreSQL"
    );
    Ok(pool)
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch<R: Record>(&self, select: &Select) -> Result<Vec<R>, AppError> {
        let q = build_select(select);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = bind_value(query, p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

fn bind_value<'q, R>(
    query: QueryAs<'q, Postgres, R, PgArguments>,
    value: &SqlValue,
) -> QueryAs<'q, Postgres, R, PgArguments> {
    match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Bool(b) => query.bind(*b),
        SqlValue::Int(n) => query.bind(*n),
        SqlValue::Text(s) => query.bind(s.clone()),
        SqlValue::Timestamp(t) => query.bind(*t),
        SqlValue::Date(d) => query.bind(*d),
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn events(&self, select: &Select) -> Result<Vec<Event>, AppError> {
        self.fetch(select).await
    }

    async fn ministries(&self, select: &Select) -> Result<Vec<Ministry>, AppError> {
        self.fetch(select).await
    }

    async fn staff_members(&self, select: &Select) -> Result<Vec<StaffMember>, AppError> {
        self.fetch(select).await
    }

    async fn site_settings(&self, select: &Select) -> Result<Vec<SiteSetting>, AppError> {
        self.fetch(select).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
