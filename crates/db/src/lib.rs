use sqlx_migrator::{Info, Migrator};

mod m0001;
pub mod table;

pub use sqlx_migrator::{Migrate, Plan};

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
    use temp_dir::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_migrations_apply_and_revert() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child("db.sqlite3");
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        let mut conn = pool.acquire().await?;

        migrator()?.run(&mut conn, &Plan::apply_all()).await?;

        let tables = sqlx::query_as::<_, (String,)>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'menu_items'",
        )
        .fetch_all(&mut *conn)
        .await?;
        assert_eq!(tables.len(), 1);

        for table in ["menu_items", "menu_item_variations", "item_containers", "item_components"] {
            sqlx::query(&format!("SELECT template_id FROM {table}"))
                .fetch_all(&mut *conn)
                .await?;
        }

        migrator()?.run(&mut conn, &Plan::revert_all()).await?;

        let tables = sqlx::query_as::<_, (String,)>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'menu_items'",
        )
        .fetch_all(&mut *conn)
        .await?;
        assert!(tables.is_empty());

        Ok(())
    }
}
