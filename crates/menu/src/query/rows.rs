use menuhub_db::table::{
    MenuAvailabilities, MenuCategories, MenuItems, Menus, PartnerPrinters, PartnerTaxes,
    ReportingCategories, SideCategories, SideItems,
};
use sea_query::{Cond, Expr, ExprTrait, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteExecutor, prelude::FromRow, sqlite::SqliteRow};

use crate::{
    Category, Device, Item, Menu, MenuAvailability, Modifier, PartnerTax, Printer,
    ReportingCategory, Result, SideCategory, SideItem, TemplateLinked,
};

pub(crate) const MENU_COLUMNS: [Menus; 7] = [
    Menus::Id,
    Menus::PartnerId,
    Menus::MenuName,
    Menus::PartnerName,
    Menus::SortingIndex,
    Menus::PosSortingIndex,
    Menus::IsActive,
];

pub(crate) const AVAILABILITY_COLUMNS: [MenuAvailabilities; 5] = [
    MenuAvailabilities::Id,
    MenuAvailabilities::MenuId,
    MenuAvailabilities::DayOfWeek,
    MenuAvailabilities::StartTime,
    MenuAvailabilities::EndTime,
];

pub(crate) const CATEGORY_COLUMNS: [MenuCategories; 9] = [
    MenuCategories::Id,
    MenuCategories::MenuId,
    MenuCategories::Name,
    MenuCategories::Description,
    MenuCategories::TakeoutAvailable,
    MenuCategories::IsActive,
    MenuCategories::SortingIndex,
    MenuCategories::PosSortingIndex,
    MenuCategories::ReportingCategoryId,
];

pub(crate) const ITEM_COLUMNS: [MenuItems; 21] = [
    MenuItems::Id,
    MenuItems::CategoryId,
    MenuItems::PartnerId,
    MenuItems::Name,
    MenuItems::Description,
    MenuItems::Price,
    MenuItems::ItemSku,
    MenuItems::Upc,
    MenuItems::IsActive,
    MenuItems::IsArchived,
    MenuItems::TaxId,
    MenuItems::Tags,
    MenuItems::SortingIndex,
    MenuItems::PosSortingIndex,
    MenuItems::ReportingCategoryId,
    MenuItems::PrinterIds,
    MenuItems::EnableSpecialInstructions,
    MenuItems::EnableModifiers,
    MenuItems::IsOpenPrice,
    MenuItems::MaxQuantityPerOrder,
    MenuItems::TemplateId,
];

pub(crate) const TAX_COLUMNS: [PartnerTaxes; 4] = [
    PartnerTaxes::Id,
    PartnerTaxes::PartnerId,
    PartnerTaxes::TaxType,
    PartnerTaxes::Rate,
];

pub(crate) const SIDE_CATEGORY_COLUMNS: [SideCategories; 5] = [
    SideCategories::Id,
    SideCategories::PartnerId,
    SideCategories::Name,
    SideCategories::Label,
    SideCategories::ReportingCategoryId,
];

pub(crate) const SIDE_ITEM_COLUMNS: [SideItems; 13] = [
    SideItems::Id,
    SideItems::SideCategoryId,
    SideItems::Name,
    SideItems::Price,
    SideItems::Calories,
    SideItems::IsDefault,
    SideItems::EnableCustomization,
    SideItems::SideCustomisationId,
    SideItems::SideCustomizationLabel,
    SideItems::TaxId,
    SideItems::ReportingCategoryId,
    SideItems::MaxQuantityPerOrder,
    SideItems::SideItemSku,
];

pub(crate) const PRINTER_COLUMNS: [PartnerPrinters; 5] = [
    PartnerPrinters::Id,
    PartnerPrinters::PartnerId,
    PartnerPrinters::Name,
    PartnerPrinters::MacAddress,
    PartnerPrinters::IsActive,
];

pub(crate) const REPORTING_CATEGORY_COLUMNS: [ReportingCategories; 6] = [
    ReportingCategories::Id,
    ReportingCategories::PartnerId,
    ReportingCategories::PartnerGroupId,
    ReportingCategories::Name,
    ReportingCategories::Description,
    ReportingCategories::IsActive,
];

pub(crate) async fn fetch_all<'c, E, T>(executor: E, statement: SelectStatement) -> Result<Vec<T>>
where
    E: SqliteExecutor<'c>,
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, T, _>(&sql, values)
        .fetch_all(executor)
        .await?)
}

pub(crate) async fn fetch_optional<'c, E, T>(
    executor: E,
    statement: SelectStatement,
) -> Result<Option<T>>
where
    E: SqliteExecutor<'c>,
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, T, _>(&sql, values)
        .fetch_optional(executor)
        .await?)
}

pub(crate) async fn menus<'c, E: SqliteExecutor<'c>>(
    executor: E,
    partner_id: i64,
    menu_id: Option<i64>,
    device: Option<Device>,
) -> Result<Vec<Menu>> {
    let mut statement = Query::select()
        .columns(MENU_COLUMNS)
        .from(Menus::Table)
        .and_where(Expr::col(Menus::PartnerId).eq(partner_id))
        .and_where(Expr::col(Menus::DeletedAt).is_null())
        .to_owned();

    if let Some(menu_id) = menu_id {
        statement.and_where(Expr::col(Menus::Id).eq(menu_id));
    }

    if device.is_none() {
        statement.and_where(Expr::col(Menus::IsActive).eq(true));
    }

    fetch_all(executor, statement).await
}

pub(crate) async fn availabilities<'c, E: SqliteExecutor<'c>>(
    executor: E,
    menu_ids: &[i64],
) -> Result<Vec<MenuAvailability>> {
    if menu_ids.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns(AVAILABILITY_COLUMNS)
        .from(MenuAvailabilities::Table)
        .and_where(Expr::col(MenuAvailabilities::MenuId).is_in(menu_ids.iter().copied()))
        .and_where(Expr::col(MenuAvailabilities::DeletedAt).is_null())
        .order_by(MenuAvailabilities::DayOfWeek, sea_query::Order::Asc)
        .order_by(MenuAvailabilities::StartTime, sea_query::Order::Asc)
        .to_owned();

    fetch_all(executor, statement).await
}

/// Inactive categories stay in the result, only menus are filtered on it.
pub(crate) async fn categories<'c, E: SqliteExecutor<'c>>(
    executor: E,
    menu_ids: &[i64],
) -> Result<Vec<Category>> {
    if menu_ids.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns(CATEGORY_COLUMNS)
        .from(MenuCategories::Table)
        .and_where(Expr::col(MenuCategories::MenuId).is_in(menu_ids.iter().copied()))
        .and_where(Expr::col(MenuCategories::DeletedAt).is_null())
        .to_owned();

    fetch_all(executor, statement).await
}

pub(crate) async fn items<'c, E: SqliteExecutor<'c>>(
    executor: E,
    category_ids: &[i64],
    with_archived: bool,
) -> Result<Vec<Item>> {
    if category_ids.is_empty() {
        return Ok(vec![]);
    }

    let mut statement = Query::select()
        .columns(ITEM_COLUMNS)
        .from(MenuItems::Table)
        .and_where(Expr::col(MenuItems::CategoryId).is_in(category_ids.iter().copied()))
        .and_where(Expr::col(MenuItems::DeletedAt).is_null())
        .to_owned();

    if !with_archived {
        statement.and_where(Expr::col(MenuItems::IsArchived).eq(false));
    }

    fetch_all(executor, statement).await
}

pub(crate) async fn taxes<'c, E: SqliteExecutor<'c>>(
    executor: E,
    tax_ids: &[i64],
) -> Result<Vec<PartnerTax>> {
    if tax_ids.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns(TAX_COLUMNS)
        .from(PartnerTaxes::Table)
        .and_where(Expr::col(PartnerTaxes::Id).is_in(tax_ids.iter().copied()))
        .and_where(Expr::col(PartnerTaxes::DeletedAt).is_null())
        .to_owned();

    fetch_all(executor, statement).await
}

pub(crate) async fn partner_taxes<'c, E: SqliteExecutor<'c>>(
    executor: E,
    partner_id: i64,
) -> Result<Vec<PartnerTax>> {
    let statement = Query::select()
        .columns(TAX_COLUMNS)
        .from(PartnerTaxes::Table)
        .and_where(Expr::col(PartnerTaxes::PartnerId).eq(partner_id))
        .and_where(Expr::col(PartnerTaxes::DeletedAt).is_null())
        .order_by(PartnerTaxes::Id, sea_query::Order::Asc)
        .to_owned();

    fetch_all(executor, statement).await
}

pub(crate) async fn modifiers<'c, E: SqliteExecutor<'c>, M: Modifier>(
    executor: E,
    item_ids: &[i64],
) -> Result<Vec<M>> {
    if item_ids.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns(M::columns())
        .from(M::TABLE)
        .and_where(Expr::col(M::ITEM_ID).is_in(item_ids.iter().copied()))
        .and_where(Expr::col(M::DELETED_AT).is_null())
        .to_owned();

    fetch_all(executor, statement).await
}

pub(crate) async fn template_modifiers<'c, E: SqliteExecutor<'c>, M: TemplateLinked>(
    executor: E,
    template_id: i64,
) -> Result<Vec<M>> {
    let statement = Query::select()
        .columns(M::columns())
        .from(M::TABLE)
        .and_where(Expr::col(M::TEMPLATE_ID).eq(template_id))
        .and_where(Expr::col(M::DELETED_AT).is_null())
        .order_by(M::ID, sea_query::Order::Asc)
        .to_owned();

    fetch_all(executor, statement).await
}

pub(crate) async fn side_categories<'c, E: SqliteExecutor<'c>>(
    executor: E,
    partner_id: Option<i64>,
    ids: Option<&[i64]>,
) -> Result<Vec<SideCategory>> {
    if ids.is_some_and(|ids| ids.is_empty()) {
        return Ok(vec![]);
    }

    let mut statement = Query::select()
        .columns(SIDE_CATEGORY_COLUMNS)
        .from(SideCategories::Table)
        .and_where(Expr::col(SideCategories::DeletedAt).is_null())
        .order_by(SideCategories::Id, sea_query::Order::Asc)
        .to_owned();

    if let Some(partner_id) = partner_id {
        statement.and_where(Expr::col(SideCategories::PartnerId).eq(partner_id));
    }

    if let Some(ids) = ids {
        statement.and_where(Expr::col(SideCategories::Id).is_in(ids.iter().copied()));
    }

    fetch_all(executor, statement).await
}

pub(crate) async fn side_items<'c, E: SqliteExecutor<'c>>(
    executor: E,
    side_category_ids: &[i64],
) -> Result<Vec<SideItem>> {
    if side_category_ids.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns(SIDE_ITEM_COLUMNS)
        .from(SideItems::Table)
        .and_where(Expr::col(SideItems::SideCategoryId).is_in(side_category_ids.iter().copied()))
        .and_where(Expr::col(SideItems::DeletedAt).is_null())
        .order_by(SideItems::Id, sea_query::Order::Asc)
        .to_owned();

    fetch_all(executor, statement).await
}

pub(crate) async fn printers<'c, E: SqliteExecutor<'c>>(
    executor: E,
    partner_id: i64,
) -> Result<Vec<Printer>> {
    let statement = Query::select()
        .columns(PRINTER_COLUMNS)
        .from(PartnerPrinters::Table)
        .and_where(Expr::col(PartnerPrinters::PartnerId).eq(partner_id))
        .and_where(Expr::col(PartnerPrinters::DeletedAt).is_null())
        .order_by(PartnerPrinters::Id, sea_query::Order::Asc)
        .to_owned();

    fetch_all(executor, statement).await
}

/// Reporting categories owned by the partner or shared through its group.
pub(crate) async fn reporting_categories<'c, E: SqliteExecutor<'c>>(
    executor: E,
    partner_id: i64,
    group_id: Option<i64>,
) -> Result<Vec<ReportingCategory>> {
    let mut owner = Cond::any().add(Expr::col(ReportingCategories::PartnerId).eq(partner_id));
    if let Some(group_id) = group_id {
        owner = owner.add(Expr::col(ReportingCategories::PartnerGroupId).eq(group_id));
    }

    let statement = Query::select()
        .columns(REPORTING_CATEGORY_COLUMNS)
        .from(ReportingCategories::Table)
        .cond_where(owner)
        .and_where(Expr::col(ReportingCategories::DeletedAt).is_null())
        .order_by(ReportingCategories::Id, sea_query::Order::Asc)
        .to_owned();

    fetch_all(executor, statement).await
}
