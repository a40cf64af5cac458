use menuhub_db::table::{MenuCategories, MenuItems, Menus};
use sea_query::{Cond, Expr, ExprTrait, Query};

use crate::{
    Category, Device, Item, Menu, Modifier, ModifierKind, ReportingCategory, Result,
    dispatch_modifier, sort_rows,
};

use super::{
    SideCategoryNode, attach_side_items,
    rows::{self, CATEGORY_COLUMNS, ITEM_COLUMNS, MENU_COLUMNS},
};

impl super::Query {
    pub async fn find_menu(&self, id: i64) -> Result<Option<Menu>> {
        let statement = Query::select()
            .columns(MENU_COLUMNS)
            .from(Menus::Table)
            .and_where(Expr::col(Menus::Id).eq(id))
            .and_where(Expr::col(Menus::DeletedAt).is_null())
            .to_owned();

        rows::fetch_optional(&self.0, statement).await
    }

    /// Active menus of a partner in display order.
    pub async fn list_partner_menus(&self, partner_id: i64) -> Result<Vec<Menu>> {
        let mut menus = rows::menus(&self.0, partner_id, None, None).await?;
        sort_rows(&mut menus, None);

        Ok(menus)
    }

    pub async fn find_category(&self, id: i64) -> Result<Option<Category>> {
        let statement = Query::select()
            .columns(CATEGORY_COLUMNS)
            .from(MenuCategories::Table)
            .and_where(Expr::col(MenuCategories::Id).eq(id))
            .and_where(Expr::col(MenuCategories::DeletedAt).is_null())
            .to_owned();

        rows::fetch_optional(&self.0, statement).await
    }

    /// Looks an item up by id, archived items included.
    pub async fn find_item(&self, id: i64) -> Result<Option<Item>> {
        let statement = Query::select()
            .columns(ITEM_COLUMNS)
            .from(MenuItems::Table)
            .and_where(Expr::col(MenuItems::Id).eq(id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .to_owned();

        rows::fetch_optional(&self.0, statement).await
    }

    /// Non archived items of a category. Without a device only active items
    /// are listed.
    /// Live items stamped out of a template, archived ones included.
    pub async fn items_by_template(&self, template_id: i64) -> Result<Vec<Item>> {
        let statement = Query::select()
            .columns(ITEM_COLUMNS)
            .from(MenuItems::Table)
            .and_where(Expr::col(MenuItems::TemplateId).eq(template_id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .order_by(MenuItems::Id, sea_query::Order::Asc)
            .to_owned();

        rows::fetch_all(&self.0, statement).await
    }

    /// Partners owning at least one live item of the template.
    pub async fn template_partner_ids(&self, template_id: i64) -> Result<Vec<i64>> {
        let statement = Query::select()
            .distinct()
            .column(MenuItems::PartnerId)
            .from(MenuItems::Table)
            .and_where(Expr::col(MenuItems::TemplateId).eq(template_id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .order_by(MenuItems::PartnerId, sea_query::Order::Asc)
            .to_owned();

        let rows: Vec<(i64,)> = rows::fetch_all(&self.0, statement).await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn list_category_items(
        &self,
        category_id: i64,
        device: Option<Device>,
    ) -> Result<Vec<Item>> {
        let mut items = rows::items(&self.0, &[category_id], false).await?;
        if device.is_none() {
            items.retain(|item| item.is_active);
        }
        sort_rows(&mut items, device);

        Ok(items)
    }

    pub async fn side_categories(&self, partner_id: i64) -> Result<Vec<SideCategoryNode>> {
        let categories = rows::side_categories(&self.0, Some(partner_id), None).await?;

        attach_side_items(&self.0, categories).await
    }

    pub async fn reporting_categories(
        &self,
        partner_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<ReportingCategory>> {
        rows::reporting_categories(&self.0, partner_id, group_id).await
    }

    pub async fn is_menu_present_for_partner(&self, partner_id: i64, menu_id: i64) -> Result<bool> {
        let statement = Query::select()
            .column(Menus::Id)
            .from(Menus::Table)
            .and_where(Expr::col(Menus::Id).eq(menu_id))
            .and_where(Expr::col(Menus::PartnerId).eq(partner_id))
            .and_where(Expr::col(Menus::DeletedAt).is_null())
            .to_owned();

        let row: Option<(i64,)> = rows::fetch_optional(&self.0, statement).await?;

        Ok(row.is_some())
    }

    /// No other live item of the partner uses `value` as sku or upc.
    pub async fn is_item_sku_unique(
        &self,
        partner_id: i64,
        value: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut statement = Query::select()
            .column(MenuItems::Id)
            .from(MenuItems::Table)
            .and_where(Expr::col(MenuItems::PartnerId).eq(partner_id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .cond_where(
                Cond::any()
                    .add(Expr::col(MenuItems::ItemSku).eq(value))
                    .add(Expr::col(MenuItems::Upc).eq(value)),
            )
            .limit(1)
            .to_owned();

        if let Some(id) = exclude_id {
            statement.and_where(Expr::col(MenuItems::Id).ne(id));
        }

        let row: Option<(i64,)> = rows::fetch_optional(&self.0, statement).await?;

        Ok(row.is_none())
    }

    /// Same as [`Self::is_item_sku_unique`] for one modifier table.
    ///
    /// Kinds without sku or upc columns are always unique.
    pub async fn is_modifier_sku_unique(
        &self,
        kind: ModifierKind,
        partner_id: i64,
        value: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        dispatch_modifier!(kind, M => self.modifier_sku_unique::<M>(partner_id, value, exclude_id).await)
    }

    async fn modifier_sku_unique<M: Modifier>(
        &self,
        partner_id: i64,
        value: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let columns = [M::SKU, M::UPC].into_iter().flatten().collect::<Vec<_>>();
        if columns.is_empty() {
            return Ok(true);
        }

        let codes = columns.into_iter().fold(Cond::any(), |codes, column| {
            codes.add(Expr::col((M::TABLE, column)).eq(value))
        });

        let mut statement = Query::select()
            .column((M::TABLE, M::ID))
            .from(M::TABLE)
            .inner_join(
                MenuItems::Table,
                Expr::col((M::TABLE, M::ITEM_ID)).equals((MenuItems::Table, MenuItems::Id)),
            )
            .and_where(Expr::col((MenuItems::Table, MenuItems::PartnerId)).eq(partner_id))
            .and_where(Expr::col((MenuItems::Table, MenuItems::DeletedAt)).is_null())
            .and_where(Expr::col((M::TABLE, M::DELETED_AT)).is_null())
            .cond_where(codes)
            .limit(1)
            .to_owned();

        if let Some(id) = exclude_id {
            statement.and_where(Expr::col((M::TABLE, M::ID)).ne(id));
        }

        let row: Option<(i64,)> = rows::fetch_optional(&self.0, statement).await?;

        Ok(row.is_none())
    }
}
