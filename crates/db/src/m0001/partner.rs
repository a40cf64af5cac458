use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{PartnerPrinters, PartnerTaxes, ReportingCategories};

fn create_tax_table() -> TableCreateStatement {
    Table::create()
        .table(PartnerTaxes::Table)
        .col(
            ColumnDef::new(PartnerTaxes::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(PartnerTaxes::PartnerId).big_integer().not_null())
        .col(
            ColumnDef::new(PartnerTaxes::TaxType)
                .string()
                .not_null()
                .string_len(50),
        )
        .col(
            ColumnDef::new(PartnerTaxes::Rate)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(ColumnDef::new(PartnerTaxes::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_tax_table() -> TableDropStatement {
    Table::drop().table(PartnerTaxes::Table).to_owned()
}

operation!(CreateTaxTable, create_tax_table, drop_tax_table);

fn create_tax_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_partner_taxes_partner_id")
        .table(PartnerTaxes::Table)
        .col(PartnerTaxes::PartnerId)
        .to_owned()
}

fn drop_tax_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_partner_taxes_partner_id")
        .table(PartnerTaxes::Table)
        .to_owned()
}

operation!(CreateTaxIdx1, create_tax_idx_1, drop_tax_idx_1);

fn create_printer_table() -> TableCreateStatement {
    Table::create()
        .table(PartnerPrinters::Table)
        .col(
            ColumnDef::new(PartnerPrinters::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(PartnerPrinters::PartnerId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(PartnerPrinters::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(PartnerPrinters::MacAddress)
                .string()
                .not_null()
                .string_len(17),
        )
        .col(
            ColumnDef::new(PartnerPrinters::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(ColumnDef::new(PartnerPrinters::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_printer_table() -> TableDropStatement {
    Table::drop().table(PartnerPrinters::Table).to_owned()
}

operation!(CreatePrinterTable, create_printer_table, drop_printer_table);

fn create_printer_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_partner_printers_partner_mac")
        .table(PartnerPrinters::Table)
        .col(PartnerPrinters::PartnerId)
        .col(PartnerPrinters::MacAddress)
        .to_owned()
}

fn drop_printer_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_partner_printers_partner_mac")
        .table(PartnerPrinters::Table)
        .to_owned()
}

operation!(CreatePrinterIdx1, create_printer_idx_1, drop_printer_idx_1);

fn create_reporting_category_table() -> TableCreateStatement {
    Table::create()
        .table(ReportingCategories::Table)
        .col(
            ColumnDef::new(ReportingCategories::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(ReportingCategories::PartnerId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ReportingCategories::PartnerGroupId)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(ReportingCategories::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ReportingCategories::Description)
                .string()
                .null()
                .string_len(2000),
        )
        .col(
            ColumnDef::new(ReportingCategories::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(ReportingCategories::DeletedAt)
                .big_integer()
                .null(),
        )
        .to_owned()
}

fn drop_reporting_category_table() -> TableDropStatement {
    Table::drop().table(ReportingCategories::Table).to_owned()
}

operation!(
    CreateReportingCategoryTable,
    create_reporting_category_table,
    drop_reporting_category_table
);

fn create_reporting_category_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_reporting_categories_group")
        .table(ReportingCategories::Table)
        .col(ReportingCategories::PartnerGroupId)
        .col(ReportingCategories::PartnerId)
        .to_owned()
}

fn drop_reporting_category_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_reporting_categories_group")
        .table(ReportingCategories::Table)
        .to_owned()
}

operation!(
    CreateReportingCategoryIdx1,
    create_reporting_category_idx_1,
    drop_reporting_category_idx_1
);
