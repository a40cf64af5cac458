use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::MenuCategories;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MenuCategories::Table)
        .col(
            ColumnDef::new(MenuCategories::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(MenuCategories::MenuId).big_integer().not_null())
        .col(
            ColumnDef::new(MenuCategories::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(MenuCategories::Description)
                .string()
                .null()
                .string_len(2000),
        )
        .col(
            ColumnDef::new(MenuCategories::TakeoutAvailable)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(MenuCategories::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(ColumnDef::new(MenuCategories::SortingIndex).integer().null())
        .col(
            ColumnDef::new(MenuCategories::PosSortingIndex)
                .integer()
                .null(),
        )
        .col(
            ColumnDef::new(MenuCategories::ReportingCategoryId)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(MenuCategories::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(MenuCategories::UpdatedAt).big_integer().null())
        .col(ColumnDef::new(MenuCategories::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MenuCategories::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_categories_menu_id")
        .table(MenuCategories::Table)
        .col(MenuCategories::MenuId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_categories_menu_id")
        .table(MenuCategories::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
