use menuhub_db::table::{SideCategories, SideItems};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::{Result, query::rows};

use super::{Condition, Record};

#[derive(Debug, Clone, Default, Validate)]
pub struct SideCategoryInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub partner_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub label: Option<String>,
    pub reporting_category_id: Option<i64>,
}

impl Record for SideCategoryInput {
    type Table = SideCategories;

    const TABLE: SideCategories = SideCategories::Table;
    const ID: SideCategories = SideCategories::Id;
    const DELETED_AT: SideCategories = SideCategories::DeletedAt;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<SideCategories> {
        vec![
            SideCategories::PartnerId,
            SideCategories::Name,
            SideCategories::Label,
            SideCategories::ReportingCategoryId,
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.partner_id.into(),
            self.name.clone().into(),
            self.label.clone().into(),
            self.reporting_category_id.into(),
        ]
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct SideItemInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub side_category_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub calories: Option<i64>,
    pub is_default: bool,
    pub enable_customization: bool,
    /// Side category offered as customization of this side item.
    pub side_customisation_id: Option<i64>,
    #[validate(length(max = 100))]
    pub side_customization_label: Option<String>,
    pub tax_id: Option<i64>,
    pub reporting_category_id: Option<i64>,
    #[validate(range(min = 1))]
    pub max_quantity_per_order: Option<i64>,
    #[validate(length(max = 64))]
    pub side_item_sku: Option<String>,
}

impl Record for SideItemInput {
    type Table = SideItems;

    const TABLE: SideItems = SideItems::Table;
    const ID: SideItems = SideItems::Id;
    const DELETED_AT: SideItems = SideItems::DeletedAt;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<SideItems> {
        vec![
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
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.side_category_id.into(),
            self.name.clone().into(),
            self.price.into(),
            self.calories.into(),
            self.is_default.into(),
            self.enable_customization.into(),
            self.side_customisation_id.into(),
            self.side_customization_label.clone().into(),
            self.tax_id.into(),
            self.reporting_category_id.into(),
            self.max_quantity_per_order.into(),
            self.side_item_sku.clone().into(),
        ]
    }
}

impl super::Command {
    pub async fn save_side_category(&self, input: SideCategoryInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    pub async fn save_side_item(&self, input: SideItemInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    /// Deletes side categories together with their side items.
    /// `Condition::Parent` selects by partner id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_side_category(&self, condition: Condition) -> Result<u64> {
        let mut tx = self.0.begin().await?;

        let statement = Query::select()
            .column(SideCategories::Id)
            .from(SideCategories::Table)
            .and_where(condition.expr(SideCategories::Id, SideCategories::PartnerId))
            .and_where(Expr::col(SideCategories::DeletedAt).is_null())
            .to_owned();

        let ids = rows::fetch_all::<_, (i64,)>(&mut *tx, statement)
            .await?
            .into_iter()
            .map(|(id,)| id)
            .collect::<Vec<_>>();

        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = super::soft_delete(
            &mut *tx,
            SideCategories::Table,
            SideCategories::Id,
            SideCategories::PartnerId,
            SideCategories::DeletedAt,
            &Condition::Ids(ids.clone()),
        )
        .await?;

        for id in ids {
            super::soft_delete(
                &mut *tx,
                SideItems::Table,
                SideItems::Id,
                SideItems::SideCategoryId,
                SideItems::DeletedAt,
                &Condition::Parent(id),
            )
            .await?;
        }

        tx.commit().await?;

        Ok(deleted)
    }

    /// `Condition::Parent` selects by side category id.
    pub async fn delete_side_items(&self, condition: impl Into<Condition>) -> Result<u64> {
        super::soft_delete(
            &self.0,
            SideItems::Table,
            SideItems::Id,
            SideItems::SideCategoryId,
            SideItems::DeletedAt,
            &condition.into(),
        )
        .await
    }

    /// Points every live side item of the side category at the reporting
    /// category.
    pub async fn assign_side_reporting_category(
        &self,
        reporting_category_id: i64,
        side_category_id: i64,
    ) -> Result<u64> {
        let statement = Query::update()
            .table(SideItems::Table)
            .value(SideItems::ReportingCategoryId, reporting_category_id)
            .and_where(Expr::col(SideItems::SideCategoryId).eq(side_category_id))
            .and_where(Expr::col(SideItems::DeletedAt).is_null())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected())
    }
}
