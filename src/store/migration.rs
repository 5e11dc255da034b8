//! Embedded schema migrations: ordered DDL with up/down steps, tracked in `schema_migrations`.

use crate::error::AppError;
use sqlx::PgPool;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub up: &'static [&'static str],
    pub down: &'static [&'static str],
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_site_settings",
        up: &[r#"
            CREATE TABLE IF NOT EXISTS site_settings (
                key VARCHAR(100) PRIMARY KEY,
                value TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                updated_by BIGINT,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#],
        down: &["DROP TABLE IF EXISTS site_settings"],
    },
    Migration {
        version: 2,
        name: "create_ministries",
        up: &[
            r#"
            CREATE TABLE IF NOT EXISTS ministries (
                id BIGSERIAL PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                deleted_at TIMESTAMPTZ,
                name VARCHAR(255) COLLATE "C" NOT NULL,
                slug VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                leader_id BIGINT,
                contact_email VARCHAR(255) NOT NULL DEFAULT '',
                meeting_time VARCHAR(255) NOT NULL DEFAULT '',
                location VARCHAR(255) NOT NULL DEFAULT '',
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                sort_order INTEGER NOT NULL DEFAULT 0,
                page_content TEXT NOT NULL DEFAULT ''
            )
            "#,
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_ministries_slug ON ministries (slug)",
            "CREATE INDEX IF NOT EXISTS idx_ministries_deleted_at ON ministries (deleted_at)",
        ],
        down: &["DROP TABLE IF EXISTS ministries"],
    },
    Migration {
        version: 3,
        name: "create_events",
        up: &[
            r#"
            CREATE TABLE IF NOT EXISTS events (
                id BIGSERIAL PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                deleted_at TIMESTAMPTZ,
                title VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                event_date TIMESTAMPTZ NOT NULL,
                end_date TIMESTAMPTZ,
                location VARCHAR(255) NOT NULL DEFAULT '',
                location_details TEXT NOT NULL DEFAULT '',
                recurrence_rule VARCHAR(20)
                    CHECK (recurrence_rule IN ('weekly', 'biweekly', 'monthly', 'yearly')),
                recurrence_end DATE,
                registration_enabled BOOLEAN NOT NULL DEFAULT FALSE,
                capacity_limit INTEGER,
                registration_deadline TIMESTAMPTZ,
                visible_from TIMESTAMPTZ,
                visible_until TIMESTAMPTZ,
                is_public BOOLEAN NOT NULL DEFAULT TRUE,
                ministry_id BIGINT REFERENCES ministries (id),
                created_by BIGINT
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_events_event_date ON events (event_date)",
            "CREATE INDEX IF NOT EXISTS idx_events_deleted_at ON events (deleted_at)",
        ],
        down: &["DROP TABLE IF EXISTS events"],
    },
    Migration {
        version: 4,
        name: "create_staff_members",
        up: &[
            r#"
            CREATE TABLE IF NOT EXISTS staff_members (
                id BIGSERIAL PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                deleted_at TIMESTAMPTZ,
                user_id BIGINT,
                name VARCHAR(255) COLLATE "C" NOT NULL,
                title VARCHAR(255) NOT NULL,
                bio TEXT NOT NULL DEFAULT '',
                email VARCHAR(255) NOT NULL DEFAULT '',
                phone VARCHAR(20) NOT NULL DEFAULT '',
                photo_url VARCHAR(500) NOT NULL DEFAULT '',
                display_order INTEGER NOT NULL DEFAULT 0,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                category VARCHAR(20) NOT NULL DEFAULT 'staff'
                    CHECK (category IN ('pastor', 'staff'))
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_staff_members_deleted_at ON staff_members (deleted_at)",
        ],
        down: &["DROP TABLE IF EXISTS staff_members"],
    },
];

/// Migrations not yet in `applied`, in version order.
pub fn pending(applied: &[i64]) -> Vec<&'static Migration> {
    MIGRATIONS
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .collect()
}

async fn ensure_migrations_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version BIGINT PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>, AppError> {
    ensure_migrations_table(pool).await?;
    let rows: Vec<(i64,)> = sqlx::query_as("SELECT version FROM schema_migrations ORDER BY version")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(v,)| v).collect())
}

/// Apply every pending migration, each in its own transaction. Returns how many ran.
pub async fn migrate_up(pool: &PgPool) -> Result<usize, AppError> {
    let applied = applied_versions(pool).await?;
    let todo = pending(&applied);
    for m in &todo {
        let mut tx = pool.begin().await?;
        for stmt in m.up {
            sqlx::query(stmt).execute(&mut *tx).await.map_err(|e| {
                AppError::Migration(format!("{} (version {}): {}", m.name, m.version, e))
            })?;
        }
        sqlx::query("INSERT INTO schema_migrations (version, name) VALUES ($1, $2)")
            .bind(m.version)
            .bind(m.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(version = m.version, name = m.name, "migration applied");
    }
    let version = applied.iter().chain(todo.iter().map(|m| &m.version)).max().copied().unwrap_or(0);
    tracing::info!(version, applied = todo.len(), "migrations up to date");
    Ok(todo.len())
}

/// Revert the most recent migration. Returns its version, or `None` when nothing is applied.
pub async fn migrate_down(pool: &PgPool) -> Result<Option<i64>, AppError> {
    let applied = applied_versions(pool).await?;
    let Some(&latest) = applied.iter().max() else {
        tracing::info!("no migrations to roll back");
        return Ok(None);
    };
    let m = MIGRATIONS
        .iter()
        .find(|m| m.version == latest)
        .ok_or_else(|| AppError::Migration(format!("unknown applied version {}", latest)))?;
    let mut tx = pool.begin().await?;
    for stmt in m.down {
        sqlx::query(stmt).execute(&mut *tx).await.map_err(|e| {
            AppError::Migration(format!("{} (version {}): {}", m.name, m.version, e))
        })?;
    }
    sqlx::query("DELETE FROM schema_migrations WHERE version = $1")
        .bind(latest)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    tracing::info!(version = latest, name = m.name, "migration rolled back");
    Ok(Some(latest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn versions_strictly_increase() {
        let versions: Vec<i64> = MIGRATIONS.iter().map(|m| m.version).collect();
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn names_are_unique_and_steps_present() {
        let names: HashSet<&str> = MIGRATIONS.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), MIGRATIONS.len());
        assert!(MIGRATIONS.iter().all(|m| !m.up.is_empty() && !m.down.is_empty()));
    }

    #[test]
    fn pending_skips_applied_versions_in_order() {
        let todo: Vec<i64> = pending(&[1, 3]).iter().map(|m| m.version).collect();
        assert_eq!(todo, vec![2, 4]);
        assert!(pending(&[1, 2, 3, 4]).is_empty());
    }

    #[test]
    fn events_reference_ministries_created_earlier() {
        let ministries = MIGRATIONS.iter().position(|m| m.name == "create_ministries");
        let events = MIGRATIONS.iter().position(|m| m.name == "create_events");
        assert!(ministries < events);
    }

    #[test]
    fn name_columns_sort_bytewise() {
        for table in ["create_ministries", "create_staff_members"] {
            let m = MIGRATIONS.iter().find(|m| m.name == table).unwrap();
            assert!(
                m.up.iter().any(|stmt| stmt.contains(r#"name VARCHAR(255) COLLATE "C" NOT NULL"#)),
                "{table}"
            );
        }
    }
}
