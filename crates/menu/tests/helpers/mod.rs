use std::{path::PathBuf, str::FromStr};

use menuhub_db::{Migrate, Plan};
use menuhub_menu::{CategoryInput, Command, ItemInput, MenuInput, Query};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<(Query, Command)> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    menuhub_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok((Query(pool.clone()), Command(pool)))
}

#[allow(dead_code)]
pub async fn create_menu(cmd: &Command, partner_id: i64, name: &str) -> anyhow::Result<i64> {
    Ok(cmd
        .save_menu(MenuInput {
            partner_id,
            menu_name: name.to_owned(),
            is_active: true,
            ..Default::default()
        })
        .await?)
}

#[allow(dead_code)]
pub async fn create_category(cmd: &Command, menu_id: i64, name: &str) -> anyhow::Result<i64> {
    Ok(cmd
        .save_category(CategoryInput {
            menu_id,
            name: name.to_owned(),
            is_active: true,
            ..Default::default()
        })
        .await?)
}

#[allow(dead_code)]
pub fn item_input(partner_id: i64, category_id: i64, name: &str) -> ItemInput {
    ItemInput {
        partner_id,
        category_id,
        name: name.to_owned(),
        price: 9.5,
        is_active: true,
        enable_modifiers: true,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub async fn create_item(
    cmd: &Command,
    partner_id: i64,
    category_id: i64,
    name: &str,
) -> anyhow::Result<i64> {
    Ok(cmd
        .save_item(item_input(partner_id, category_id, name))
        .await?)
}

/// One active menu with one category, returns `(menu_id, category_id)`.
#[allow(dead_code)]
pub async fn create_menu_with_category(
    cmd: &Command,
    partner_id: i64,
) -> anyhow::Result<(i64, i64)> {
    let menu_id = create_menu(cmd, partner_id, "Lunch").await?;
    let category_id = create_category(cmd, menu_id, "Burgers").await?;

    Ok((menu_id, category_id))
}
