use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{SideCategories, SideItems};

fn create_category_table() -> TableCreateStatement {
    Table::create()
        .table(SideCategories::Table)
        .col(
            ColumnDef::new(SideCategories::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SideCategories::PartnerId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SideCategories::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(SideCategories::Label)
                .string()
                .null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(SideCategories::ReportingCategoryId)
                .big_integer()
                .null(),
        )
        .col(ColumnDef::new(SideCategories::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_category_table() -> TableDropStatement {
    Table::drop().table(SideCategories::Table).to_owned()
}

operation!(CreateCategoryTable, create_category_table, drop_category_table);

fn create_category_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_side_categories_partner_id")
        .table(SideCategories::Table)
        .col(SideCategories::PartnerId)
        .to_owned()
}

fn drop_category_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_side_categories_partner_id")
        .table(SideCategories::Table)
        .to_owned()
}

operation!(CreateCategoryIdx1, create_category_idx_1, drop_category_idx_1);

fn create_item_table() -> TableCreateStatement {
    Table::create()
        .table(SideItems::Table)
        .col(
            ColumnDef::new(SideItems::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SideItems::SideCategoryId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SideItems::Name)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(
            ColumnDef::new(SideItems::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(ColumnDef::new(SideItems::Calories).integer().null())
        .col(
            ColumnDef::new(SideItems::IsDefault)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(SideItems::EnableCustomization)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(SideItems::SideCustomisationId)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(SideItems::SideCustomizationLabel)
                .string()
                .null()
                .string_len(100),
        )
        .col(ColumnDef::new(SideItems::TaxId).big_integer().null())
        .col(
            ColumnDef::new(SideItems::ReportingCategoryId)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(SideItems::MaxQuantityPerOrder)
                .integer()
                .null(),
        )
        .col(
            ColumnDef::new(SideItems::SideItemSku)
                .string()
                .null()
                .string_len(64),
        )
        .col(ColumnDef::new(SideItems::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_item_table() -> TableDropStatement {
    Table::drop().table(SideItems::Table).to_owned()
}

operation!(CreateItemTable, create_item_table, drop_item_table);

fn create_item_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_side_items_side_category_id")
        .table(SideItems::Table)
        .col(SideItems::SideCategoryId)
        .to_owned()
}

fn drop_item_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_side_items_side_category_id")
        .table(SideItems::Table)
        .to_owned()
}

operation!(CreateItemIdx1, create_item_idx_1, drop_item_idx_1);
