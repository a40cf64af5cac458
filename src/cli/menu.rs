use std::path::PathBuf;

use anyhow::Result;
use menuhub::Config;
use menuhub_menu::{Command, FetchOptions, MenuExport, Query, parse_partner_id};

fn partner(value: &str) -> Result<i64> {
    Ok(parse_partner_id(value)?)
}

pub async fn show(
    config: Config,
    partner_id: String,
    menu_id: Option<i64>,
    pos: bool,
) -> Result<()> {
    let partner_id = partner(&partner_id)?;
    let pool =
        menuhub::create_read_pool(&config.database.url, config.database.max_connections).await?;

    let mut options = if pos {
        FetchOptions::pos()
    } else {
        FetchOptions::default()
    };
    options.menu_id = menu_id;

    let menu = Query(pool).fetch_menu(partner_id, options).await?;
    println!("{}", serde_json::to_string_pretty(&menu)?);

    Ok(())
}

pub async fn export(
    config: Config,
    partner_id: String,
    group_id: Option<i64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let partner_id = partner(&partner_id)?;
    let pool =
        menuhub::create_read_pool(&config.database.url, config.database.max_connections).await?;

    let document = Query(pool).export_menu(partner_id, group_id).await?.to_json()?;

    match out {
        Some(path) => {
            std::fs::write(&path, document)?;
            tracing::info!(partner_id, path = %path.display(), "menu exported");
        }
        None => println!("{document}"),
    }

    Ok(())
}

pub async fn import(
    config: Config,
    partner_id: String,
    group_id: Option<i64>,
    file: PathBuf,
) -> Result<()> {
    let partner_id = partner(&partner_id)?;
    let document = MenuExport::from_json(&std::fs::read_to_string(&file)?)?;

    let pool = menuhub::create_write_pool(&config.database.url).await?;
    let summary = Command(pool).import_menu(partner_id, group_id, document).await?;

    tracing::info!(
        partner_id,
        menus = summary.menus,
        items = summary.items,
        skipped_sides = summary.skipped_sides,
        "menu imported"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
