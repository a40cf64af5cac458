use sea_query::{Expr, ExprTrait, Iden, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteExecutor;
use time::OffsetDateTime;
use validator::Validate;

use crate::{Error, Result};

mod category;
mod item;
mod menu;
mod modifier;
mod partner;
mod side;

pub use category::*;
pub use item::*;
pub use menu::*;
pub(crate) use modifier::upsert_modifiers;
pub use partner::*;
pub use side::*;

#[derive(Clone)]
pub struct Command(pub sqlx::SqlitePool);

/// Selects the rows a delete applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Id(i64),
    Ids(Vec<i64>),
    /// Every row owned by this parent id.
    Parent(i64),
}

impl Condition {
    fn is_empty(&self) -> bool {
        matches!(self, Condition::Ids(ids) if ids.is_empty())
    }

    pub(crate) fn expr<T: Iden + Copy + 'static>(&self, id: T, parent: T) -> Expr {
        match self {
            Condition::Id(value) => Expr::col(id).eq(*value),
            Condition::Ids(values) => Expr::col(id).is_in(values.iter().copied()),
            Condition::Parent(value) => Expr::col(parent).eq(*value),
        }
    }
}

impl From<i64> for Condition {
    fn from(value: i64) -> Self {
        Condition::Id(value)
    }
}

impl From<Vec<i64>> for Condition {
    fn from(value: Vec<i64>) -> Self {
        Condition::Ids(value)
    }
}

/// A validated input mapped onto one table row.
///
/// `columns` and `values` exclude the id and must stay aligned.
pub(crate) trait Record: Validate {
    type Table: Iden + Copy + 'static;

    const TABLE: Self::Table;
    const ID: Self::Table;
    const DELETED_AT: Self::Table;
    /// `created_at` and `updated_at` columns when the table tracks them.
    const TIMESTAMPS: Option<(Self::Table, Self::Table)> = None;

    fn id(&self) -> Option<i64>;
    fn columns() -> Vec<Self::Table>;
    fn values(&self) -> Vec<Expr>;
}

pub(crate) fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Inserts the record when it carries no id, otherwise overwrites the live
/// row with that id.
pub(crate) async fn save<'c, E: SqliteExecutor<'c>, R: Record>(
    executor: E,
    input: &R,
) -> Result<i64> {
    input.validate()?;

    let now = now();
    let mut columns = R::columns();
    let mut values = input.values();

    let Some(id) = input.id() else {
        if let Some((created_at, updated_at)) = R::TIMESTAMPS {
            columns.extend([created_at, updated_at]);
            values.extend([now.into(), now.into()]);
        }

        let statement = Query::insert()
            .into_table(R::TABLE)
            .columns(columns)
            .values_panic(values)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(executor).await?;

        return Ok(result.last_insert_rowid());
    };

    let mut statement = Query::update()
        .table(R::TABLE)
        .and_where(Expr::col(R::ID).eq(id))
        .and_where(Expr::col(R::DELETED_AT).is_null())
        .to_owned();

    for (column, value) in columns.into_iter().zip(values) {
        statement.value(column, value);
    }

    if let Some((_, updated_at)) = R::TIMESTAMPS {
        statement.value(updated_at, now);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(executor).await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound);
    }

    Ok(id)
}

/// Stamps `deleted_at` on the live rows matching `condition`.
pub(crate) async fn soft_delete<'c, E, T>(
    executor: E,
    table: T,
    id: T,
    parent: T,
    deleted_at: T,
    condition: &Condition,
) -> Result<u64>
where
    E: SqliteExecutor<'c>,
    T: Iden + Copy + 'static,
{
    if condition.is_empty() {
        return Ok(0);
    }

    let statement = Query::update()
        .table(table)
        .value(deleted_at, now())
        .and_where(condition.expr(id, parent))
        .and_where(Expr::col(deleted_at).is_null())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(executor).await?;

    Ok(result.rows_affected())
}

/// Writes a bool column on the rows with the given ids.
pub(crate) async fn set_flag<'c, E, T>(
    executor: E,
    table: T,
    id: T,
    column: T,
    ids: &[i64],
    value: bool,
) -> Result<u64>
where
    E: SqliteExecutor<'c>,
    T: Iden + Copy + 'static,
{
    if ids.is_empty() {
        return Ok(0);
    }

    let statement = Query::update()
        .table(table)
        .value(column, value)
        .and_where(Expr::col(id).is_in(ids.iter().copied()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(executor).await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use menuhub_db::table::MenuItems;
    use sea_query::SqliteQueryBuilder;

    use super::*;

    fn render(condition: &Condition) -> String {
        Query::select()
            .column(MenuItems::Id)
            .from(MenuItems::Table)
            .and_where(condition.expr(MenuItems::Id, MenuItems::CategoryId))
            .to_string(SqliteQueryBuilder)
    }

    #[test]
    fn test_condition_expr() {
        assert!(render(&Condition::Id(3)).ends_with(r#"WHERE "id" = 3"#));
        assert!(render(&Condition::Ids(vec![1, 2])).ends_with(r#"WHERE "id" IN (1, 2)"#));
        assert!(render(&Condition::Parent(9)).ends_with(r#"WHERE "category_id" = 9"#));
    }

    #[test]
    fn test_condition_empty_ids() {
        assert!(Condition::Ids(vec![]).is_empty());
        assert!(!Condition::Parent(0).is_empty());
        assert_eq!(Condition::from(4), Condition::Id(4));
    }
}
