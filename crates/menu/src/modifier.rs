use std::collections::HashMap;

use menuhub_db::table::{
    ItemAdditions, ItemAllergies, ItemComponents, ItemContainers, ItemSubstitutions,
    ItemToppings, MenuItemSides, MenuItemVariations,
};
use sea_query::{Expr, Iden};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sqlx::{prelude::FromRow, sqlite::SqliteRow};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// Every per-item customization table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Side,
    Variation,
    Addition,
    Substitution,
    Allergy,
    Topping,
    Container,
    Component,
}

impl ModifierKind {
    pub fn has_sku(&self) -> bool {
        !matches!(self, Self::Side | Self::Allergy | Self::Component)
    }

    pub fn has_upc(&self) -> bool {
        matches!(
            self,
            Self::Variation | Self::Addition | Self::Substitution | Self::Topping
        )
    }
}

/// Calls `$body` with `$m` bound to the row type of `$kind`.
#[macro_export]
macro_rules! dispatch_modifier {
    ($kind:expr, $m:ident => $body:expr) => {
        match $kind {
            $crate::ModifierKind::Side => {
                type $m = $crate::ItemSide;
                $body
            }
            $crate::ModifierKind::Variation => {
                type $m = $crate::Variation;
                $body
            }
            $crate::ModifierKind::Addition => {
                type $m = $crate::Addition;
                $body
            }
            $crate::ModifierKind::Substitution => {
                type $m = $crate::Substitution;
                $body
            }
            $crate::ModifierKind::Allergy => {
                type $m = $crate::Allergy;
                $body
            }
            $crate::ModifierKind::Topping => {
                type $m = $crate::Topping;
                $body
            }
            $crate::ModifierKind::Container => {
                type $m = $crate::Container;
                $body
            }
            $crate::ModifierKind::Component => {
                type $m = $crate::Component;
                $body
            }
        }
    };
}

/// A modifier row together with the table it lives in.
///
/// `write_columns` must start with the owning item column and stay aligned
/// with [`ModifierInput::values`].
pub trait Modifier:
    for<'r> FromRow<'r, SqliteRow>
    + Serialize
    + DeserializeOwned
    + Clone
    + Send
    + Sync
    + Unpin
    + 'static
{
    type Table: Iden + Copy + Send + Sync + 'static;
    type Input: ModifierInput;

    const KIND: ModifierKind;
    const TABLE: Self::Table;
    const ID: Self::Table;
    const ITEM_ID: Self::Table;
    const DELETED_AT: Self::Table;
    const SKU: Option<Self::Table>;
    const UPC: Option<Self::Table>;

    fn columns() -> Vec<Self::Table>;
    fn write_columns() -> Vec<Self::Table>;

    fn id(&self) -> i64;
    fn item_id(&self) -> i64;
    fn sorting_index(&self) -> Option<i64>;

    /// Copy of this row attached to another item.
    fn to_input(&self, item_id: i64) -> Self::Input;
}

pub trait ModifierInput: Validate + Send + Sync + Sized {
    fn id(&self) -> Option<i64>;
    fn values(&self) -> Vec<Expr>;

    /// Same fields written onto an existing row.
    fn relink(&self, id: i64, item_id: i64, sorting_index: Option<i64>) -> Self;
}

/// Sort index ascending when present, otherwise id ascending.
pub fn sort_modifiers<M: Modifier>(rows: &mut [M]) {
    rows.sort_by_key(|row| {
        (
            row.sorting_index().is_none(),
            row.sorting_index(),
            row.id(),
        )
    });
}

pub(crate) fn group_by_item<M: Modifier>(rows: Vec<M>) -> HashMap<i64, Vec<M>> {
    let mut groups: HashMap<i64, Vec<M>> = HashMap::new();
    for row in rows {
        groups.entry(row.item_id()).or_default().push(row);
    }

    for rows in groups.values_mut() {
        sort_modifiers(rows);
    }

    groups
}

/// Modifier rows stamped out of a partner level template.
pub trait TemplateLinked: Modifier {
    const TEMPLATE_ID: Self::Table;

    fn template_id(input: &Self::Input) -> Option<i64>;
}

/// Declares the row and input types of one modifier table.
///
/// Columns are `id`, `item_id`, the listed fields, then `sorting_index`.
macro_rules! modifier {
    (
        $row:ident, $input:ident, $kind:ident, $table:ident {
            $(
                $(#[validate($($rule:tt)*)])?
                $field:ident: $ty:ty => $column:ident,
            )*
        }
        sku: $sku:expr,
        upc: $upc:expr $(,)?
    ) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
        pub struct $row {
            pub id: i64,
            pub item_id: i64,
            $(pub $field: $ty,)*
            pub sorting_index: Option<i64>,
        }

        #[derive(Debug, Clone, Default, Validate)]
        pub struct $input {
            pub id: Option<i64>,
            #[validate(range(min = 1))]
            pub item_id: i64,
            $(
                $(#[validate($($rule)*)])?
                pub $field: $ty,
            )*
            pub sorting_index: Option<i64>,
        }

        impl Modifier for $row {
            type Table = $table;
            type Input = $input;

            const KIND: ModifierKind = ModifierKind::$kind;
            const TABLE: $table = $table::Table;
            const ID: $table = $table::Id;
            const ITEM_ID: $table = $table::ItemId;
            const DELETED_AT: $table = $table::DeletedAt;
            const SKU: Option<$table> = $sku;
            const UPC: Option<$table> = $upc;

            fn columns() -> Vec<$table> {
                let mut columns = vec![$table::Id];
                columns.extend(Self::write_columns());
                columns
            }

            fn write_columns() -> Vec<$table> {
                vec![$table::ItemId, $($table::$column,)* $table::SortingIndex]
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn item_id(&self) -> i64 {
                self.item_id
            }

            fn sorting_index(&self) -> Option<i64> {
                self.sorting_index
            }

            fn to_input(&self, item_id: i64) -> $input {
                $input {
                    id: None,
                    item_id,
                    $($field: self.$field.clone(),)*
                    sorting_index: self.sorting_index,
                }
            }
        }

        impl ModifierInput for $input {
            fn id(&self) -> Option<i64> {
                self.id
            }

            fn values(&self) -> Vec<Expr> {
                vec![
                    self.item_id.into(),
                    $(self.$field.clone().into(),)*
                    self.sorting_index.into(),
                ]
            }

            fn relink(&self, id: i64, item_id: i64, sorting_index: Option<i64>) -> $input {
                $input {
                    id: Some(id),
                    item_id,
                    $($field: self.$field.clone(),)*
                    sorting_index,
                }
            }
        }
    };
}

macro_rules! template_linked {
    ($($row:ident, $table:ident;)*) => {
        $(impl TemplateLinked for $row {
            const TEMPLATE_ID: $table = $table::TemplateId;

            fn template_id(input: &Self::Input) -> Option<i64> {
                input.template_id
            }
        })*
    };
}

modifier!(ItemSide, ItemSideInput, Side, MenuItemSides {
    #[validate(range(min = 1))]
    side_category_id: i64 => SideCategoryId,
    #[validate(length(max = 100))]
    label: Option<String> => Label,
    required: bool => Required,
}
sku: None,
upc: None);

modifier!(Variation, VariationInput, Variation, MenuItemVariations {
    #[validate(length(min = 1, max = 100))]
    name: String => Name,
    calories: Option<i64> => Calories,
    price: f64 => Price,
    is_delta: bool => IsDelta,
    is_default: bool => IsDefault,
    #[validate(length(max = 64))]
    sku: Option<String> => Sku,
    #[validate(length(max = 64))]
    upc: Option<String> => Upc,
    template_id: Option<i64> => TemplateId,
}
sku: Some(MenuItemVariations::Sku),
upc: Some(MenuItemVariations::Upc));

modifier!(Addition, AdditionInput, Addition, ItemAdditions {
    #[validate(length(min = 1, max = 100))]
    ingredient_name: String => IngredientName,
    price: f64 => Price,
    enable_addition: bool => EnableAddition,
    #[validate(length(max = 64))]
    sku: Option<String> => Sku,
    #[validate(length(max = 64))]
    upc: Option<String> => Upc,
}
sku: Some(ItemAdditions::Sku),
upc: Some(ItemAdditions::Upc));

modifier!(Substitution, SubstitutionInput, Substitution, ItemSubstitutions {
    #[validate(length(min = 1, max = 100))]
    ingredient_name: String => IngredientName,
    price: f64 => Price,
    enable_substitution: bool => EnableSubstitution,
    #[validate(length(max = 64))]
    sku: Option<String> => Sku,
    #[validate(length(max = 64))]
    upc: Option<String> => Upc,
}
sku: Some(ItemSubstitutions::Sku),
upc: Some(ItemSubstitutions::Upc));

modifier!(Allergy, AllergyInput, Allergy, ItemAllergies {
    #[validate(length(min = 1, max = 100))]
    allergy_name: String => AllergyName,
    enable_allergy: bool => EnableAllergy,
}
sku: None,
upc: None);

modifier!(Topping, ToppingInput, Topping, ItemToppings {
    #[validate(length(min = 1, max = 100))]
    topping_name: String => ToppingName,
    price: f64 => Price,
    enable_topping: bool => EnableTopping,
    #[validate(length(max = 64))]
    sku: Option<String> => Sku,
    #[validate(length(max = 64))]
    upc: Option<String> => Upc,
}
sku: Some(ItemToppings::Sku),
upc: Some(ItemToppings::Upc));

modifier!(Container, ContainerInput, Container, ItemContainers {
    #[validate(length(min = 1, max = 100))]
    name: String => Name,
    #[validate(range(min = 0.0))]
    tare_weight: f64 => TareWeight,
    price: f64 => Price,
    #[validate(length(max = 64))]
    sku: Option<String> => Sku,
    template_id: Option<i64> => TemplateId,
}
sku: Some(ItemContainers::Sku),
upc: None);

modifier!(Component, ComponentInput, Component, ItemComponents {
    #[validate(length(min = 1, max = 100))]
    component_name: String => ComponentName,
    #[validate(range(min = 0.0))]
    quantity: f64 => Quantity,
    template_id: Option<i64> => TemplateId,
}
sku: None,
upc: None);

template_linked! {
    Variation, MenuItemVariations;
    Container, ItemContainers;
    Component, ItemComponents;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantArray;

    use super::*;

    fn topping(id: i64, sorting_index: Option<i64>) -> Topping {
        Topping {
            id,
            item_id: 1,
            topping_name: format!("topping {id}"),
            sorting_index,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_modifiers_by_id_without_index() {
        let mut rows = vec![topping(5, None), topping(3, None), topping(9, None)];
        sort_modifiers(&mut rows);

        let ids = rows.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 5, 9]);
    }

    #[test]
    fn test_sort_modifiers_index_dominates() {
        let mut rows = vec![
            topping(5, None),
            topping(3, Some(2)),
            topping(9, Some(1)),
            topping(1, None),
            topping(7, Some(1)),
        ];
        sort_modifiers(&mut rows);

        let ids = rows.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![7, 9, 3, 1, 5]);
    }

    #[test]
    fn test_group_by_item() {
        let mut rows = vec![topping(4, None), topping(2, None)];
        rows.push(Topping {
            item_id: 2,
            ..topping(1, None)
        });

        let groups = group_by_item(rows);
        assert_eq!(groups.len(), 2);
        let ids = groups[&1].iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_kind_names_round_trip_through_str() {
        for kind in ModifierKind::VARIANTS {
            assert_eq!(ModifierKind::from_str(kind.as_ref()).ok(), Some(*kind));
        }
        assert_eq!(ModifierKind::Topping.to_string(), "topping");
        assert!(ModifierKind::from_str("toppings").is_err());
    }

    #[test]
    fn test_relink_keeps_shared_fields() {
        let template = ContainerInput {
            item_id: 4,
            name: "Tray".to_owned(),
            tare_weight: 0.2,
            template_id: Some(8),
            sorting_index: Some(1),
            ..Default::default()
        };

        let input = template.relink(12, 30, None);
        assert_eq!(input.id, Some(12));
        assert_eq!(input.item_id, 30);
        assert_eq!(input.sorting_index, None);
        assert_eq!(input.name, "Tray");
        assert_eq!(Container::template_id(&input), Some(8));
    }

    #[test]
    fn test_write_columns_match_input_values() {
        fn check<M: Modifier>(input: M::Input) {
            assert_eq!(M::write_columns().len(), input.values().len(), "{}", M::KIND);
            assert_eq!(M::columns().len(), M::write_columns().len() + 1);
            assert_eq!(M::SKU.is_some(), M::KIND.has_sku());
            assert_eq!(M::UPC.is_some(), M::KIND.has_upc());
        }

        check::<ItemSide>(ItemSideInput::default());
        check::<Variation>(VariationInput::default());
        check::<Addition>(AdditionInput::default());
        check::<Substitution>(SubstitutionInput::default());
        check::<Allergy>(AllergyInput::default());
        check::<Topping>(ToppingInput::default());
        check::<Container>(ContainerInput::default());
        check::<Component>(ComponentInput::default());
    }
}
