//! Database migration utilities

use menuhub_db::{Migrate, Plan};
use sqlx::{Sqlite, migrate::MigrateDatabase};

use crate::config::Config;

/// Create the database if missing and apply every migration
#[tracing::instrument(skip_all)]
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    let url = &config.database.url;

    if !Sqlite::database_exists(url).await? {
        tracing::info!("Database does not exist, creating: {url}");
        Sqlite::create_database(url).await?;
    }

    let pool = crate::db::create_pool(url, 1).await?;
    let mut conn = pool.acquire().await?;
    menuhub_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database and run migrations again
#[tracing::instrument(skip_all)]
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    let url = &config.database.url;

    if Sqlite::database_exists(url).await? {
        tracing::warn!("Dropping existing database: {url}");
        Sqlite::drop_database(url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, ObservabilityConfig};

    fn config(url: String) -> Config {
        Config {
            database: DatabaseConfig {
                url,
                max_connections: 1,
            },
            observability: ObservabilityConfig::default(),
        }
    }

    async fn menu_count(url: &str) -> anyhow::Result<i64> {
        let pool = crate::db::create_pool(url, 1).await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menus")
            .fetch_one(&pool)
            .await?;
        pool.close().await;

        Ok(count)
    }

    #[tokio::test]
    async fn test_migrate_then_reset() -> anyhow::Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let url = format!("sqlite:{}", dir.child("menuhub.db").to_string_lossy());
        let config = config(url.to_owned());

        migrate(&config).await?;
        // Idempotent
        migrate(&config).await?;

        let pool = crate::db::create_pool(&url, 1).await?;
        sqlx::query(
            "INSERT INTO menus (partner_id, menu_name, is_active, created_at) VALUES (1, 'Lunch', 1, 0)",
        )
        .execute(&pool)
        .await?;
        pool.close().await;
        assert_eq!(menu_count(&url).await?, 1);

        reset(&config).await?;
        assert_eq!(menu_count(&url).await?, 0);

        Ok(())
    }
}
