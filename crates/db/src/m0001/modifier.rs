use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{
    ItemAdditions, ItemAllergies, ItemComponents, ItemContainers, ItemSubstitutions,
    ItemToppings, MenuItemSides, MenuItemVariations,
};

fn create_side_table() -> TableCreateStatement {
    Table::create()
        .table(MenuItemSides::Table)
        .col(
            ColumnDef::new(MenuItemSides::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(MenuItemSides::ItemId).big_integer().not_null())
        .col(
            ColumnDef::new(MenuItemSides::SideCategoryId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MenuItemSides::Label)
                .string()
                .null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(MenuItemSides::Required)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(MenuItemSides::SortingIndex).integer().null())
        .col(ColumnDef::new(MenuItemSides::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_side_table() -> TableDropStatement {
    Table::drop().table(MenuItemSides::Table).to_owned()
}

operation!(CreateSideTable, create_side_table, drop_side_table);

fn create_side_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_item_sides_item_id")
        .table(MenuItemSides::Table)
        .col(MenuItemSides::ItemId)
        .to_owned()
}

fn drop_side_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_item_sides_item_id")
        .table(MenuItemSides::Table)
        .to_owned()
}

operation!(CreateSideIdx1, create_side_idx_1, drop_side_idx_1);

fn create_variation_table() -> TableCreateStatement {
    Table::create()
        .table(MenuItemVariations::Table)
        .col(
            ColumnDef::new(MenuItemVariations::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(MenuItemVariations::ItemId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MenuItemVariations::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(MenuItemVariations::Calories).integer().null())
        .col(
            ColumnDef::new(MenuItemVariations::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(MenuItemVariations::IsDelta)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(MenuItemVariations::IsDefault)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(MenuItemVariations::Sku)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(MenuItemVariations::Upc)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(MenuItemVariations::TemplateId)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(MenuItemVariations::SortingIndex)
                .integer()
                .null(),
        )
        .col(
            ColumnDef::new(MenuItemVariations::DeletedAt)
                .big_integer()
                .null(),
        )
        .to_owned()
}

fn drop_variation_table() -> TableDropStatement {
    Table::drop().table(MenuItemVariations::Table).to_owned()
}

operation!(
    CreateVariationTable,
    create_variation_table,
    drop_variation_table
);

fn create_variation_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_menu_item_variations_item_id")
        .table(MenuItemVariations::Table)
        .col(MenuItemVariations::ItemId)
        .to_owned()
}

fn drop_variation_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_menu_item_variations_item_id")
        .table(MenuItemVariations::Table)
        .to_owned()
}

operation!(
    CreateVariationIdx1,
    create_variation_idx_1,
    drop_variation_idx_1
);

fn create_addition_table() -> TableCreateStatement {
    Table::create()
        .table(ItemAdditions::Table)
        .col(
            ColumnDef::new(ItemAdditions::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ItemAdditions::ItemId).big_integer().not_null())
        .col(
            ColumnDef::new(ItemAdditions::IngredientName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ItemAdditions::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ItemAdditions::EnableAddition)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(ItemAdditions::Sku)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(ItemAdditions::Upc)
                .string()
                .null()
                .string_len(64),
        )
        .col(ColumnDef::new(ItemAdditions::SortingIndex).integer().null())
        .col(ColumnDef::new(ItemAdditions::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_addition_table() -> TableDropStatement {
    Table::drop().table(ItemAdditions::Table).to_owned()
}

operation!(CreateAdditionTable, create_addition_table, drop_addition_table);

fn create_addition_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_item_additions_item_id")
        .table(ItemAdditions::Table)
        .col(ItemAdditions::ItemId)
        .to_owned()
}

fn drop_addition_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_item_additions_item_id")
        .table(ItemAdditions::Table)
        .to_owned()
}

operation!(CreateAdditionIdx1, create_addition_idx_1, drop_addition_idx_1);

fn create_substitution_table() -> TableCreateStatement {
    Table::create()
        .table(ItemSubstitutions::Table)
        .col(
            ColumnDef::new(ItemSubstitutions::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::ItemId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::IngredientName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::EnableSubstitution)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::Sku)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::Upc)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::SortingIndex)
                .integer()
                .null(),
        )
        .col(
            ColumnDef::new(ItemSubstitutions::DeletedAt)
                .big_integer()
                .null(),
        )
        .to_owned()
}

fn drop_substitution_table() -> TableDropStatement {
    Table::drop().table(ItemSubstitutions::Table).to_owned()
}

operation!(
    CreateSubstitutionTable,
    create_substitution_table,
    drop_substitution_table
);

fn create_substitution_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_item_substitutions_item_id")
        .table(ItemSubstitutions::Table)
        .col(ItemSubstitutions::ItemId)
        .to_owned()
}

fn drop_substitution_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_item_substitutions_item_id")
        .table(ItemSubstitutions::Table)
        .to_owned()
}

operation!(
    CreateSubstitutionIdx1,
    create_substitution_idx_1,
    drop_substitution_idx_1
);

fn create_allergy_table() -> TableCreateStatement {
    Table::create()
        .table(ItemAllergies::Table)
        .col(
            ColumnDef::new(ItemAllergies::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ItemAllergies::ItemId).big_integer().not_null())
        .col(
            ColumnDef::new(ItemAllergies::AllergyName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ItemAllergies::EnableAllergy)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(ColumnDef::new(ItemAllergies::SortingIndex).integer().null())
        .col(ColumnDef::new(ItemAllergies::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_allergy_table() -> TableDropStatement {
    Table::drop().table(ItemAllergies::Table).to_owned()
}

operation!(CreateAllergyTable, create_allergy_table, drop_allergy_table);

fn create_allergy_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_item_allergies_item_id")
        .table(ItemAllergies::Table)
        .col(ItemAllergies::ItemId)
        .to_owned()
}

fn drop_allergy_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_item_allergies_item_id")
        .table(ItemAllergies::Table)
        .to_owned()
}

operation!(CreateAllergyIdx1, create_allergy_idx_1, drop_allergy_idx_1);

fn create_topping_table() -> TableCreateStatement {
    Table::create()
        .table(ItemToppings::Table)
        .col(
            ColumnDef::new(ItemToppings::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ItemToppings::ItemId).big_integer().not_null())
        .col(
            ColumnDef::new(ItemToppings::ToppingName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ItemToppings::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ItemToppings::EnableTopping)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(ItemToppings::Sku)
                .string()
                .null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(ItemToppings::Upc)
                .string()
                .null()
                .string_len(64),
        )
        .col(ColumnDef::new(ItemToppings::SortingIndex).integer().null())
        .col(ColumnDef::new(ItemToppings::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_topping_table() -> TableDropStatement {
    Table::drop().table(ItemToppings::Table).to_owned()
}

operation!(CreateToppingTable, create_topping_table, drop_topping_table);

fn create_topping_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_item_toppings_item_id")
        .table(ItemToppings::Table)
        .col(ItemToppings::ItemId)
        .to_owned()
}

fn drop_topping_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_item_toppings_item_id")
        .table(ItemToppings::Table)
        .to_owned()
}

operation!(CreateToppingIdx1, create_topping_idx_1, drop_topping_idx_1);

fn create_container_table() -> TableCreateStatement {
    Table::create()
        .table(ItemContainers::Table)
        .col(
            ColumnDef::new(ItemContainers::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ItemContainers::ItemId).big_integer().not_null())
        .col(
            ColumnDef::new(ItemContainers::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ItemContainers::TareWeight)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ItemContainers::Price)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ItemContainers::Sku)
                .string()
                .null()
                .string_len(64),
        )
        .col(ColumnDef::new(ItemContainers::TemplateId).big_integer().null())
        .col(ColumnDef::new(ItemContainers::SortingIndex).integer().null())
        .col(ColumnDef::new(ItemContainers::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_container_table() -> TableDropStatement {
    Table::drop().table(ItemContainers::Table).to_owned()
}

operation!(
    CreateContainerTable,
    create_container_table,
    drop_container_table
);

fn create_container_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_item_containers_item_id")
        .table(ItemContainers::Table)
        .col(ItemContainers::ItemId)
        .to_owned()
}

fn drop_container_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_item_containers_item_id")
        .table(ItemContainers::Table)
        .to_owned()
}

operation!(
    CreateContainerIdx1,
    create_container_idx_1,
    drop_container_idx_1
);

fn create_component_table() -> TableCreateStatement {
    Table::create()
        .table(ItemComponents::Table)
        .col(
            ColumnDef::new(ItemComponents::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ItemComponents::ItemId).big_integer().not_null())
        .col(
            ColumnDef::new(ItemComponents::ComponentName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ItemComponents::Quantity)
                .double()
                .not_null()
                .default(1.0),
        )
        .col(ColumnDef::new(ItemComponents::TemplateId).big_integer().null())
        .col(ColumnDef::new(ItemComponents::SortingIndex).integer().null())
        .col(ColumnDef::new(ItemComponents::DeletedAt).big_integer().null())
        .to_owned()
}

fn drop_component_table() -> TableDropStatement {
    Table::drop().table(ItemComponents::Table).to_owned()
}

operation!(
    CreateComponentTable,
    create_component_table,
    drop_component_table
);

fn create_component_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_item_components_item_id")
        .table(ItemComponents::Table)
        .col(ItemComponents::ItemId)
        .to_owned()
}

fn drop_component_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_item_components_item_id")
        .table(ItemComponents::Table)
        .to_owned()
}

operation!(
    CreateComponentIdx1,
    create_component_idx_1,
    drop_component_idx_1
);
