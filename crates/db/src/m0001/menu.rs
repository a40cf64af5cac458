use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{MenuAvailabilities, Menus};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Menus::Table)
        .col(
            ColumnDef::new(Menus::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Menus::PartnerId).big_integer().not_null())
        .col(
            ColumnDef::new(Menus::MenuName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Menus::PartnerName)
                .string()
                .null()
                .string_len(100),
        )
        .col(ColumnDef::new(Menus::SortingIndex).integer().null())
        .col(ColumnDef::new(Menus::PosSortingIndex).integer().null())
        .col(
            ColumnDef::new(Menus::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(ColumnDef::new(Menus::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Menus::UpdatedAt).big_integer().null())
        .col(ColumnDef::new(Menus::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Menus::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_menus_partner_id")
        .table(Menus::Table)
        .col(Menus::PartnerId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_menus_partner_id")
        .table(Menus::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);

fn create_availability_table() -> TableCreateStatement {
    Table::create()
        .table(MenuAvailabilities::Table)
        .col(
            ColumnDef::new(MenuAvailabilities::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(MenuAvailabilities::MenuId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MenuAvailabilities::DayOfWeek)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MenuAvailabilities::StartTime)
                .string()
                .not_null()
                .string_len(5),
        )
        .col(
            ColumnDef::new(MenuAvailabilities::EndTime)
                .string()
                .not_null()
                .string_len(5),
        )
        .col(
            ColumnDef::new(MenuAvailabilities::DeletedAt)
                .big_integer()
                .null(),
        )
        .to_owned()
}

fn drop_availability_table() -> TableDropStatement {
    Table::drop().table(MenuAvailabilities::Table).to_owned()
}

operation!(
    CreateAvailabilityTable,
    create_availability_table,
    drop_availability_table
);

fn create_availability_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_availabilities_menu_id")
        .table(MenuAvailabilities::Table)
        .col(MenuAvailabilities::MenuId)
        .to_owned()
}

fn drop_availability_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_availabilities_menu_id")
        .table(MenuAvailabilities::Table)
        .to_owned()
}

operation!(
    CreateAvailabilityIdx1,
    create_availability_idx_1,
    drop_availability_idx_1
);
