use menuhub_db::table::{
    MenuCategories, MenuItems, PartnerPrinters, PartnerTaxes, ReportingCategories,
    SideCategories, SideItems,
};
use sea_query::{Expr, ExprTrait, Iden, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteExecutor;
use validator::Validate;

use crate::{Result, query::rows};

use super::{Condition, Record};

#[derive(Debug, Clone, Default, Validate)]
pub struct PartnerTaxInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub partner_id: i64,
    #[validate(length(min = 1, max = 50))]
    pub tax_type: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub rate: f64,
}

impl Record for PartnerTaxInput {
    type Table = PartnerTaxes;

    const TABLE: PartnerTaxes = PartnerTaxes::Table;
    const ID: PartnerTaxes = PartnerTaxes::Id;
    const DELETED_AT: PartnerTaxes = PartnerTaxes::DeletedAt;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<PartnerTaxes> {
        vec![PartnerTaxes::PartnerId, PartnerTaxes::TaxType, PartnerTaxes::Rate]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.partner_id.into(),
            self.tax_type.clone().into(),
            self.rate.into(),
        ]
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct PrinterInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub partner_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 32))]
    pub mac_address: String,
    pub is_active: bool,
}

impl Record for PrinterInput {
    type Table = PartnerPrinters;

    const TABLE: PartnerPrinters = PartnerPrinters::Table;
    const ID: PartnerPrinters = PartnerPrinters::Id;
    const DELETED_AT: PartnerPrinters = PartnerPrinters::DeletedAt;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<PartnerPrinters> {
        vec![
            PartnerPrinters::PartnerId,
            PartnerPrinters::Name,
            PartnerPrinters::MacAddress,
            PartnerPrinters::IsActive,
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.partner_id.into(),
            self.name.clone().into(),
            self.mac_address.clone().into(),
            self.is_active.into(),
        ]
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ReportingCategoryInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub partner_id: i64,
    pub partner_group_id: Option<i64>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub is_active: bool,
}

impl Record for ReportingCategoryInput {
    type Table = ReportingCategories;

    const TABLE: ReportingCategories = ReportingCategories::Table;
    const ID: ReportingCategories = ReportingCategories::Id;
    const DELETED_AT: ReportingCategories = ReportingCategories::DeletedAt;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<ReportingCategories> {
        vec![
            ReportingCategories::PartnerId,
            ReportingCategories::PartnerGroupId,
            ReportingCategories::Name,
            ReportingCategories::Description,
            ReportingCategories::IsActive,
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.partner_id.into(),
            self.partner_group_id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.is_active.into(),
        ]
    }
}

/// Clears `column` wherever it points at one of `ids`.
async fn unassign<'c, E, T>(executor: E, table: T, column: T, ids: &[i64]) -> Result<u64>
where
    E: SqliteExecutor<'c>,
    T: Iden + Copy + 'static,
{
    let statement = Query::update()
        .table(table)
        .value(column, Option::<i64>::None)
        .and_where(Expr::col(column).is_in(ids.iter().copied()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(executor).await?;

    Ok(result.rows_affected())
}

impl super::Command {
    pub async fn save_partner_tax(&self, input: PartnerTaxInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    pub async fn save_printer(&self, input: PrinterInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    pub async fn save_reporting_category(&self, input: ReportingCategoryInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    /// Deletes reporting categories and clears every reference to them.
    /// `Condition::Parent` selects by partner id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_reporting_category(&self, condition: Condition) -> Result<u64> {
        let mut tx = self.0.begin().await?;

        let statement = Query::select()
            .column(ReportingCategories::Id)
            .from(ReportingCategories::Table)
            .and_where(condition.expr(ReportingCategories::Id, ReportingCategories::PartnerId))
            .and_where(Expr::col(ReportingCategories::DeletedAt).is_null())
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
            ReportingCategories::Table,
            ReportingCategories::Id,
            ReportingCategories::PartnerId,
            ReportingCategories::DeletedAt,
            &Condition::Ids(ids.clone()),
        )
        .await?;

        unassign(
            &mut *tx,
            MenuCategories::Table,
            MenuCategories::ReportingCategoryId,
            &ids,
        )
        .await?;
        unassign(&mut *tx, MenuItems::Table, MenuItems::ReportingCategoryId, &ids).await?;
        unassign(
            &mut *tx,
            SideCategories::Table,
            SideCategories::ReportingCategoryId,
            &ids,
        )
        .await?;
        unassign(&mut *tx, SideItems::Table, SideItems::ReportingCategoryId, &ids).await?;

        tx.commit().await?;

        Ok(deleted)
    }

    /// Points every live item of the category at the reporting category.
    pub async fn assign_reporting_category(
        &self,
        reporting_category_id: i64,
        category_id: i64,
    ) -> Result<u64> {
        let statement = Query::update()
            .table(MenuItems::Table)
            .value(MenuItems::ReportingCategoryId, reporting_category_id)
            .value(MenuItems::UpdatedAt, super::now())
            .and_where(Expr::col(MenuItems::CategoryId).eq(category_id))
            .and_where(Expr::col(MenuItems::DeletedAt).is_null())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected())
    }
}
