use menuhub_db::table::{MenuItemSides, MenuItems};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqliteExecutor};
use strum::VariantArray;
use validator::Validate;

use crate::{
    Error, ItemSide, ItemSideInput, Modifier, ModifierInput, ModifierKind, Result,
    TemplateLinked, dispatch_modifier, query::rows,
};

use super::Condition;

/// Inserts rows without id and upserts the others in one statement.
/// Returns ids in input order.
pub(crate) async fn upsert_modifiers<M: Modifier>(
    conn: &mut SqliteConnection,
    inputs: &[M::Input],
) -> Result<Vec<i64>> {
    for input in inputs {
        input.validate()?;
    }

    let mut columns = vec![M::ID];
    columns.extend(M::write_columns());

    let mut existing = Query::insert()
        .into_table(M::TABLE)
        .columns(columns)
        .to_owned();

    let mut has_existing = false;
    for input in inputs {
        let Some(id) = input.id() else {
            continue;
        };

        let mut values: Vec<Expr> = vec![id.into()];
        values.extend(input.values());
        existing.values_panic(values);
        has_existing = true;
    }

    if has_existing {
        existing.on_conflict(
            OnConflict::column(M::ID)
                .update_columns(M::write_columns().into_iter().skip(1))
                .to_owned(),
        );

        let (sql, values) = existing.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;
    }

    let mut ids = Vec::with_capacity(inputs.len());
    for input in inputs {
        if let Some(id) = input.id() {
            ids.push(id);
            continue;
        }

        let statement = Query::insert()
            .into_table(M::TABLE)
            .columns(M::write_columns())
            .values_panic(input.values())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *conn).await?;
        ids.push(result.last_insert_rowid());
    }

    Ok(ids)
}

async fn delete_kind<'c, E: SqliteExecutor<'c>, M: Modifier>(
    executor: E,
    condition: &Condition,
) -> Result<u64> {
    super::soft_delete(
        executor,
        M::TABLE,
        M::ID,
        M::ITEM_ID,
        M::DELETED_AT,
        condition,
    )
    .await
}

impl super::Command {
    /// Bulk upsert of one modifier kind.
    #[tracing::instrument(skip_all, fields(kind = %M::KIND, rows = inputs.len()))]
    pub async fn save_modifiers<M: Modifier>(&self, inputs: Vec<M::Input>) -> Result<Vec<i64>> {
        let mut tx = self.0.begin().await?;
        let ids = upsert_modifiers::<M>(&mut tx, &inputs).await?;
        tx.commit().await?;

        Ok(ids)
    }

    /// Makes `sides` the complete side list of the item.
    #[tracing::instrument(skip(self, sides))]
    pub async fn save_item_sides(
        &self,
        item_id: i64,
        sides: Vec<ItemSideInput>,
    ) -> Result<Vec<i64>> {
        if item_id <= 0 {
            crate::invalid!("item id must be positive, got {item_id}");
        }

        let sides = sides
            .into_iter()
            .map(|side| ItemSideInput { item_id, ..side })
            .collect::<Vec<_>>();

        let kept = sides.iter().filter_map(|s| s.id).collect::<Vec<_>>();

        let mut tx = self.0.begin().await?;

        let statement = Query::update()
            .table(MenuItemSides::Table)
            .value(MenuItemSides::DeletedAt, super::now())
            .and_where(Expr::col(MenuItemSides::ItemId).eq(item_id))
            .and_where(Expr::col(MenuItemSides::Id).is_not_in(kept))
            .and_where(Expr::col(MenuItemSides::DeletedAt).is_null())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let ids = upsert_modifiers::<ItemSide>(&mut tx, &sides).await?;
        tx.commit().await?;

        Ok(ids)
    }

    /// `Condition::Parent` selects by item id.
    pub async fn delete_modifiers(
        &self,
        kind: ModifierKind,
        condition: impl Into<Condition>,
    ) -> Result<u64> {
        let condition = condition.into();

        dispatch_modifier!(kind, M => delete_kind::<_, M>(&self.0, &condition).await)
    }

    /// Deletes the item and every modifier row it owns.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item_entities(&self, item_id: i64) -> Result<u64> {
        let mut tx = self.0.begin().await?;

        let deleted = super::soft_delete(
            &mut *tx,
            MenuItems::Table,
            MenuItems::Id,
            MenuItems::CategoryId,
            MenuItems::DeletedAt,
            &Condition::Id(item_id),
        )
        .await?;

        if deleted == 0 {
            return Err(Error::NotFound);
        }

        let condition = Condition::Parent(item_id);
        let mut total = deleted;
        for kind in ModifierKind::VARIANTS {
            total += dispatch_modifier!(*kind, M => delete_kind::<_, M>(&mut *tx, &condition).await?);
        }

        tx.commit().await?;

        tracing::info!(rows = total, "item entities deleted");

        Ok(total)
    }

    /// Writes the fields of `input` onto every live row linked to
    /// `template_id`. Each row keeps its id, item and sort index.
    #[tracing::instrument(skip(self, input), fields(kind = %M::KIND))]
    pub async fn update_by_template<M: TemplateLinked>(
        &self,
        template_id: i64,
        input: M::Input,
    ) -> Result<u64> {
        if M::template_id(&input) != Some(template_id) {
            crate::invalid!("input is not linked to template {template_id}");
        }

        let mut tx = self.0.begin().await?;

        let inputs = rows::template_modifiers::<_, M>(&mut *tx, template_id)
            .await?
            .iter()
            .map(|row| input.relink(row.id(), row.item_id(), row.sorting_index()))
            .collect::<Vec<_>>();
        let ids = upsert_modifiers::<M>(&mut tx, &inputs).await?;

        tx.commit().await?;

        Ok(ids.len() as u64)
    }

    /// Deletes the rows linked to `template_id`, limited to `item_ids` when
    /// given.
    pub async fn delete_by_template<M: TemplateLinked>(
        &self,
        template_id: i64,
        item_ids: Option<&[i64]>,
    ) -> Result<u64> {
        if item_ids.is_some_and(|ids| ids.is_empty()) {
            return Ok(0);
        }

        let mut statement = Query::update()
            .table(M::TABLE)
            .value(M::DELETED_AT, super::now())
            .and_where(Expr::col(M::TEMPLATE_ID).eq(template_id))
            .and_where(Expr::col(M::DELETED_AT).is_null())
            .to_owned();

        if let Some(item_ids) = item_ids {
            statement.and_where(Expr::col(M::ITEM_ID).is_in(item_ids.iter().copied()));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected())
    }
}
