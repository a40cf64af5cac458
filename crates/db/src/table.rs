use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Menus {
    Table,
    Id,
    PartnerId,
    MenuName,
    PartnerName,
    SortingIndex,
    PosSortingIndex,
    IsActive,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuAvailabilities {
    Table,
    Id,
    MenuId,
    DayOfWeek,
    StartTime,
    EndTime,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuCategories {
    Table,
    Id,
    MenuId,
    Name,
    Description,
    TakeoutAvailable,
    IsActive,
    SortingIndex,
    PosSortingIndex,
    ReportingCategoryId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuItems {
    Table,
    Id,
    CategoryId,
    PartnerId,
    Name,
    Description,
    Price,
    ItemSku,
    Upc,
    IsActive,
    IsArchived,
    TaxId,
    Tags,
    SortingIndex,
    PosSortingIndex,
    ReportingCategoryId,
    PrinterIds,
    EnableSpecialInstructions,
    EnableModifiers,
    IsOpenPrice,
    MaxQuantityPerOrder,
    TemplateId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuItemSides {
    Table,
    Id,
    ItemId,
    SideCategoryId,
    Label,
    Required,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuItemVariations {
    Table,
    Id,
    ItemId,
    Name,
    Calories,
    Price,
    IsDelta,
    IsDefault,
    Sku,
    Upc,
    TemplateId,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ItemAdditions {
    Table,
    Id,
    ItemId,
    IngredientName,
    Price,
    EnableAddition,
    Sku,
    Upc,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ItemSubstitutions {
    Table,
    Id,
    ItemId,
    IngredientName,
    Price,
    EnableSubstitution,
    Sku,
    Upc,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ItemAllergies {
    Table,
    Id,
    ItemId,
    AllergyName,
    EnableAllergy,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ItemToppings {
    Table,
    Id,
    ItemId,
    ToppingName,
    Price,
    EnableTopping,
    Sku,
    Upc,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ItemContainers {
    Table,
    Id,
    ItemId,
    Name,
    TareWeight,
    Price,
    Sku,
    TemplateId,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ItemComponents {
    Table,
    Id,
    ItemId,
    ComponentName,
    Quantity,
    TemplateId,
    SortingIndex,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum SideCategories {
    Table,
    Id,
    PartnerId,
    Name,
    Label,
    ReportingCategoryId,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum SideItems {
    Table,
    Id,
    SideCategoryId,
    Name,
    Price,
    Calories,
    IsDefault,
    EnableCustomization,
    SideCustomisationId,
    SideCustomizationLabel,
    TaxId,
    ReportingCategoryId,
    MaxQuantityPerOrder,
    SideItemSku,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum PartnerTaxes {
    Table,
    Id,
    PartnerId,
    TaxType,
    Rate,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum PartnerPrinters {
    Table,
    Id,
    PartnerId,
    Name,
    MacAddress,
    IsActive,
    DeletedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ReportingCategories {
    Table,
    Id,
    PartnerId,
    PartnerGroupId,
    Name,
    Description,
    IsActive,
    DeletedAt,
}
