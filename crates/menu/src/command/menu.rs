use menuhub_db::table::{MenuAvailabilities, Menus};
use sea_query::Expr;
use validator::Validate;

use crate::Result;

use super::{Condition, Record};

#[derive(Debug, Clone, Default, Validate)]
pub struct MenuInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub partner_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub menu_name: String,
    #[validate(length(max = 150))]
    pub partner_name: Option<String>,
    pub sorting_index: Option<i64>,
    pub pos_sorting_index: Option<i64>,
    pub is_active: bool,
}

impl Record for MenuInput {
    type Table = Menus;

    const TABLE: Menus = Menus::Table;
    const ID: Menus = Menus::Id;
    const DELETED_AT: Menus = Menus::DeletedAt;
    const TIMESTAMPS: Option<(Menus, Menus)> = Some((Menus::CreatedAt, Menus::UpdatedAt));

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<Menus> {
        vec![
            Menus::PartnerId,
            Menus::MenuName,
            Menus::PartnerName,
            Menus::SortingIndex,
            Menus::PosSortingIndex,
            Menus::IsActive,
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.partner_id.into(),
            self.menu_name.clone().into(),
            self.partner_name.clone().into(),
            self.sorting_index.into(),
            self.pos_sorting_index.into(),
            self.is_active.into(),
        ]
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct AvailabilityInput {
    pub id: Option<i64>,
    #[validate(range(min = 1))]
    pub menu_id: i64,
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: i64,
    #[validate(length(equal = 5))]
    pub start_time: String,
    #[validate(length(equal = 5))]
    pub end_time: String,
}

impl Record for AvailabilityInput {
    type Table = MenuAvailabilities;

    const TABLE: MenuAvailabilities = MenuAvailabilities::Table;
    const ID: MenuAvailabilities = MenuAvailabilities::Id;
    const DELETED_AT: MenuAvailabilities = MenuAvailabilities::DeletedAt;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn columns() -> Vec<MenuAvailabilities> {
        vec![
            MenuAvailabilities::MenuId,
            MenuAvailabilities::DayOfWeek,
            MenuAvailabilities::StartTime,
            MenuAvailabilities::EndTime,
        ]
    }

    fn values(&self) -> Vec<Expr> {
        vec![
            self.menu_id.into(),
            self.day_of_week.into(),
            self.start_time.clone().into(),
            self.end_time.clone().into(),
        ]
    }
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(id = ?input.id, partner_id = input.partner_id))]
    pub async fn save_menu(&self, input: MenuInput) -> Result<i64> {
        super::save(&self.0, &input).await
    }

    pub async fn delete_menus(&self, condition: impl Into<Condition>) -> Result<u64> {
        super::soft_delete(
            &self.0,
            Menus::Table,
            Menus::Id,
            Menus::PartnerId,
            Menus::DeletedAt,
            &condition.into(),
        )
        .await
    }

    pub async fn set_menus_active(&self, ids: &[i64], active: bool) -> Result<u64> {
        super::set_flag(&self.0, Menus::Table, Menus::Id, Menus::IsActive, ids, active).await
    }

    /// Saves every availability window in one transaction.
    pub async fn save_availabilities(&self, inputs: Vec<AvailabilityInput>) -> Result<Vec<i64>> {
        let mut tx = self.0.begin().await?;
        let mut ids = Vec::with_capacity(inputs.len());
        for input in &inputs {
            ids.push(super::save(&mut *tx, input).await?);
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// `Condition::Parent` selects by menu id.
    pub async fn delete_availabilities(&self, condition: impl Into<Condition>) -> Result<u64> {
        super::soft_delete(
            &self.0,
            MenuAvailabilities::Table,
            MenuAvailabilities::Id,
            MenuAvailabilities::MenuId,
            MenuAvailabilities::DeletedAt,
            &condition.into(),
        )
        .await
    }
}
