use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::MenuItems;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MenuItems::Table)
        .col(
            ColumnDef::new(MenuItems::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(MenuItems::CategoryId).big_integer().not_null())
        .col(ColumnDef::new(MenuItems::PartnerId).big_integer().not_null())
        .col(
            ColumnDef::new(MenuItems::Name)
                .string()
                .not_null()
                .string_len(150),
        )
        .col(
            ColumnDef::new(MenuItems::Description)
                .string()
                .null()
                .string_len(2000),
        )
        .col(
            ColumnDef::new(MenuItems::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(MenuItems::ItemSku)
                .string()
                .null()
                .string_len(64),
        )
        .col(ColumnDef::new(MenuItems::Upc).string().null().string_len(64))
        .col(
            ColumnDef::new(MenuItems::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(MenuItems::IsArchived)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(MenuItems::TaxId).big_integer().null())
        .col(ColumnDef::new(MenuItems::Tags).string().null())
        .col(ColumnDef::new(MenuItems::SortingIndex).integer().null())
        .col(ColumnDef::new(MenuItems::PosSortingIndex).integer().null())
        .col(
            ColumnDef::new(MenuItems::ReportingCategoryId)
                .big_integer()
                .null(),
        )
        .col(ColumnDef::new(MenuItems::PrinterIds).string().null())
        .col(
            ColumnDef::new(MenuItems::EnableSpecialInstructions)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(MenuItems::EnableModifiers)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(MenuItems::IsOpenPrice)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(MenuItems::MaxQuantityPerOrder)
                .integer()
                .null(),
        )
        .col(ColumnDef::new(MenuItems::TemplateId).big_integer().null())
        .col(ColumnDef::new(MenuItems::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(MenuItems::UpdatedAt).big_integer().null())
        .col(ColumnDef::new(MenuItems::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MenuItems::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_items_category_id")
        .table(MenuItems::Table)
        .col(MenuItems::CategoryId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_items_category_id")
        .table(MenuItems::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);

fn create_idx_2() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_items_partner_sku")
        .table(MenuItems::Table)
        .col(MenuItems::PartnerId)
        .col(MenuItems::ItemSku)
        .to_owned()
}

fn drop_idx_2() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_items_partner_sku")
        .table(MenuItems::Table)
        .to_owned()
}

operation!(CreateIdx2, create_idx_2, drop_idx_2);

fn create_idx_3() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_items_template_id")
        .table(MenuItems::Table)
        .col(MenuItems::TemplateId)
        .to_owned()
}

fn drop_idx_3() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_items_template_id")
        .table(MenuItems::Table)
        .to_owned()
}

operation!(CreateIdx3, create_idx_3, drop_idx_3);
