use menuhub_db::table::{MenuCategories, MenuItems};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

use crate::{Device, Result};

use super::{Condition, Record};

#[derive(Debug, Clone, Default, Validate)]
pub struct CategoryInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub menu_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub takeout_available: bool,
    pub is_active: bool,
    pub sorting_index: Option<i64>,
    pub pos_sorting_index: Option<i64>,
    pub reporting_category_id: Option<i64>,
}

impl Record for CategoryInput {
    type Table = MenuCategories;

    const TABLE: MenuCategories = MenuCategories::Table;
    const ID: MenuCategories = MenuCategories::Id;
    const DELETED_AT: MenuCategories = MenuCategories::DeletedAt;
    const TIMESTAMPS: Option<(MenuCategories, MenuCategories)> =
        Some((MenuCategories::CreatedAt, MenuCategories::UpdatedAt));

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<MenuCategories> {
        vec![
            MenuCategories::MenuId,
            MenuCategories::Name,
            MenuCategories::Description,
            MenuCategories::TakeoutAvailable,
            MenuCategories::IsActive,
            MenuCategories::SortingIndex,
            MenuCategories::PosSortingIndex,
            MenuCategories::ReportingCategoryId,
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.menu_id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.takeout_available.into(),
            self.is_active.into(),
            self.sorting_index.into(),
            self.pos_sorting_index.into(),
            self.reporting_category_id.into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortTarget {
    Category,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortUpdate {
    pub id: i64,
    pub sorting_index: Option<i64>,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(id = ?input.id, menu_id = input.menu_id))]
    pub async fn save_category(&self, input: CategoryInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    /// `Condition::Parent` selects by menu id.
    pub async fn delete_categories(&self, condition: impl Into<Condition>) -> Result<u64> {
        super::soft_delete(
            &self.0,
            MenuCategories::Table,
            MenuCategories::Id,
            MenuCategories::MenuId,
            MenuCategories::DeletedAt,
            &condition.into(),
        )
        .await
    }

    /// Writes the POS sort index when `device` is set, the general one otherwise.
    #[tracing::instrument(skip(self, updates))]
    pub async fn update_sort_order(
        &self,
        target: SortTarget,
        updates: Vec<SortUpdate>,
        device: Option<Device>,
    ) -> Result<u64> {
        let mut tx = self.0.begin().await?;
        let mut total = 0;

        for update in updates {
            let statement = match target {
                SortTarget::Category => {
                    let column = match device {
                        Some(Device::Pos) => MenuCategories::PosSortingIndex,
                        None => MenuCategories::SortingIndex,
                    };

                    Query::update()
                        .table(MenuCategories::Table)
                        .value(column, update.sorting_index)
                        .value(MenuCategories::UpdatedAt, super::now())
                        .and_where(Expr::col(MenuCategories::Id).eq(update.id))
                        .and_where(Expr::col(MenuCategories::DeletedAt).is_null())
                        .to_owned()
                }
                SortTarget::Item => {
                    let column = match device {
                        Some(Device::Pos) => MenuItems::PosSortingIndex,
                        None => MenuItems::SortingIndex,
                    };

                    Query::update()
                        .table(MenuItems::Table)
                        .value(column, update.sorting_index)
                        .value(MenuItems::UpdatedAt, super::now())
                        .and_where(Expr::col(MenuItems::Id).eq(update.id))
                        .and_where(Expr::col(MenuItems::DeletedAt).is_null())
                        .to_owned()
                }
            };

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            total += sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        Ok(total)
    }
}
