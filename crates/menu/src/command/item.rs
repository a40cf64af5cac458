use menuhub_db::table::MenuItems;
use sea_query::{Cond, Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::Result;

use super::{Condition, Record};

#[derive(Debug, Clone, Default, Validate)]
pub struct ItemInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub category_id: i64,
    #[validate(range(min = 1))]
    pub partner_id: i64,
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(max = 64))]
    pub item_sku: Option<String>,
    #[validate(length(max = 64))]
    pub upc: Option<String>,
    pub is_active: bool,
    pub is_archived: bool,
    pub tax_id: Option<i64>,
    pub tags: Vec<String>,
    pub sorting_index: Option<i64>,
    pub pos_sorting_index: Option<i64>,
    pub reporting_category_id: Option<i64>,
    pub printer_ids: Vec<i64>,
    pub enable_special_instructions: bool,
    pub enable_modifiers: bool,
    pub is_open_price: bool,
    #[validate(range(min = 1))]
    pub max_quantity_per_order: Option<i64>,
    pub template_id: Option<i64>,
}

pub(crate) fn join<T: ToString>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    Some(
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}

impl Record for ItemInput {
    type Table = MenuItems;

    const TABLE: MenuItems = MenuItems::Table;
    const ID: MenuItems = MenuItems::Id;
    const DELETED_AT: MenuItems = MenuItems::DeletedAt;
    const TIMESTAMPS: Option<(MenuItems, MenuItems)> =
        Some((MenuItems::CreatedAt, MenuItems::UpdatedAt));

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<MenuItems> {
        vec![
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
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.category_id.into(),
            self.partner_id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.price.into(),
            self.item_sku.clone().into(),
            self.upc.clone().into(),
            self.is_active.into(),
            self.is_archived.into(),
            self.tax_id.into(),
            join(&self.tags).into(),
            self.sorting_index.into(),
            self.pos_sorting_index.into(),
            self.reporting_category_id.into(),
            join(&self.printer_ids).into(),
            self.enable_special_instructions.into(),
            self.enable_modifiers.into(),
            self.is_open_price.into(),
            self.max_quantity_per_order.into(),
            self.template_id.into(),
        ]
    }
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(id = ?input.id, category_id = input.category_id))]
    pub async fn save_item(&self, input: ItemInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    /// Deletes item rows only, see [`Self::delete_item_entities`] for the
    /// modifiers. `Condition::Parent` selects by category id.
    pub async fn delete_items(&self, condition: impl Into<Condition>) -> Result<u64> {
        super::soft_delete(
            &self.0,
            MenuItems::Table,
            MenuItems::Id,
            MenuItems::CategoryId,
            MenuItems::DeletedAt,
            &condition.into(),
        )
        .await
    }

    pub async fn set_items_active(&self, ids: &[i64], active: bool) -> Result<u64> {
        super::set_flag(
            &self.0,
            MenuItems::Table,
            MenuItems::Id,
            MenuItems::IsActive,
            ids,
            active,
        )
        .await
    }

    /// Toggles every live item of the partner carrying at least one of `tags`.
    #[tracing::instrument(skip(self))]
    pub async fn set_active_by_tags(
        &self,
        partner_id: i64,
        tags: &[String],
        active: bool,
    ) -> Result<u64> {
        let tags = tags
            .iter()
            .map(|t| t.replace(' ', ""))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();

        if tags.is_empty() {
            return Ok(0);
        }

        // instr keeps `%` and `_` inside a tag literal
        let mut matches = Cond::any();
        for tag in tags {
            matches = matches.add(Expr::cust_with_values(
                "instr(',' || REPLACE(IFNULL(\"tags\", ''), ' ', '') || ',', ?) > 0",
                [format!(",{tag},")],
            ));
        }

        let statement = Query::update()
            .table(MenuItems::Table)
            .value(MenuItems::IsActive, active)
            .value(MenuItems::UpdatedAt, super::now())
            .and_where(Expr::col(MenuItems::PartnerId).eq(partner_id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .cond_where(matches)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(updated = result.rows_affected(), "items toggled by tags");

        Ok(result.rows_affected())
    }

    pub async fn set_special_instructions(&self, ids: &[i64], enabled: bool) -> Result<u64> {
        super::set_flag(
            &self.0,
            MenuItems::Table,
            MenuItems::Id,
            MenuItems::EnableSpecialInstructions,
            ids,
            enabled,
        )
        .await
    }

    /// Routes every live item of the category to `printer_ids`. An empty list
    /// clears the routing.
    #[tracing::instrument(skip(self))]
    pub async fn assign_printers(
        &self,
        partner_id: i64,
        category_id: i64,
        printer_ids: &[i64],
    ) -> Result<u64> {
        let statement = Query::update()
            .table(MenuItems::Table)
            .value(MenuItems::PrinterIds, join(printer_ids))
            .value(MenuItems::UpdatedAt, super::now())
            .and_where(Expr::col(MenuItems::CategoryId).eq(category_id))
            .and_where(Expr::col(MenuItems::PartnerId).eq(partner_id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lists() {
        assert_eq!(join::<i64>(&[]), None);
        assert_eq!(join(&[3, 1]).as_deref(), Some("3,1"));
        assert_eq!(
            join(&["vegan".to_owned(), "spicy".to_owned()]).as_deref(),
            Some("vegan,spicy")
        );
    }
}
