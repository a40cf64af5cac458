use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use strum::{AsRefStr, Display, EnumString};

/// Selects the sort key and the active-only filter of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Pos,
}

/// Rows that are ordered by a device dependent sort index.
pub trait Sortable {
    fn id(&self) -> i64;
    fn sorting_index(&self) -> Option<i64>;
    fn pos_sorting_index(&self) -> Option<i64>;

    fn sort_key(&self, device: Option<Device>) -> Option<i64> {
        match device {
            Some(Device::Pos) => self.pos_sorting_index(),
            None => self.sorting_index(),
        }
    }
}

/// Sort index ascending with rows without an index first, then id
/// descending.
pub fn sort_rows<T: Sortable>(rows: &mut [T], device: Option<Device>) {
    rows.sort_by(|a, b| {
        a.sort_key(device)
            .cmp(&b.sort_key(device))
            .then(b.id().cmp(&a.id()))
    });
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Menu {
    pub id: i64,
    pub partner_id: i64,
    pub menu_name: String,
    pub partner_name: Option<String>,
    pub sorting_index: Option<i64>,
    pub pos_sorting_index: Option<i64>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MenuAvailability {
    pub id: i64,
    pub menu_id: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub takeout_available: bool,
    pub is_active: bool,
    pub sorting_index: Option<i64>,
    pub pos_sorting_index: Option<i64>,
    pub reporting_category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub category_id: i64,
    pub partner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub item_sku: Option<String>,
    pub upc: Option<String>,
    pub is_active: bool,
    pub is_archived: bool,
    pub tax_id: Option<i64>,
    pub tags: Option<String>,
    pub sorting_index: Option<i64>,
    pub pos_sorting_index: Option<i64>,
    pub reporting_category_id: Option<i64>,
    pub printer_ids: Option<String>,
    pub enable_special_instructions: bool,
    pub enable_modifiers: bool,
    pub is_open_price: bool,
    pub max_quantity_per_order: Option<i64>,
    pub template_id: Option<i64>,
}

impl Item {
    pub fn tags(&self) -> Vec<&str> {
        split_list(self.tags.as_deref())
    }

    pub fn printer_ids(&self) -> Vec<&str> {
        split_list(self.printer_ids.as_deref())
    }
}

fn split_list(value: Option<&str>) -> Vec<&str> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect()
}

macro_rules! sortable {
    ($($ty:ty),*) => {
        $(impl Sortable for $ty {
            fn id(&self) -> i64 {
                self.id
            }

            fn sorting_index(&self) -> Option<i64> {
                self.sorting_index
            }

            fn pos_sorting_index(&self) -> Option<i64> {
                self.pos_sorting_index
            }
        })*
    };
}

sortable!(Menu, Category, Item);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PartnerTax {
    pub id: i64,
    pub partner_id: i64,
    pub tax_type: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SideCategory {
    pub id: i64,
    pub partner_id: i64,
    pub name: String,
    pub label: Option<String>,
    pub reporting_category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SideItem {
    pub id: i64,
    pub side_category_id: i64,
    pub name: String,
    pub price: f64,
    pub calories: Option<i64>,
    pub is_default: bool,
    pub enable_customization: bool,
    pub side_customisation_id: Option<i64>,
    pub side_customization_label: Option<String>,
    pub tax_id: Option<i64>,
    pub reporting_category_id: Option<i64>,
    pub max_quantity_per_order: Option<i64>,
    pub side_item_sku: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReportingCategory {
    pub id: i64,
    pub partner_id: i64,
    pub partner_group_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Printer {
    pub id: i64,
    pub partner_id: i64,
    pub name: String,
    pub mac_address: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, sorting_index: Option<i64>, pos_sorting_index: Option<i64>) -> Category {
        Category {
            id,
            sorting_index,
            pos_sorting_index,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_rows_by_index_then_id_desc() {
        let mut rows = vec![
            category(1, Some(2), None),
            category(2, None, Some(0)),
            category(3, Some(1), Some(1)),
            category(4, Some(1), None),
        ];

        sort_rows(&mut rows, None);
        let ids = rows.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 4, 3, 1]);

        sort_rows(&mut rows, Some(Device::Pos));
        let ids = rows.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_item_lists() {
        let item = Item {
            tags: Some("vegan, spicy,,lunch".to_owned()),
            printer_ids: None,
            ..Default::default()
        };

        assert_eq!(item.tags(), vec!["vegan", "spicy", "lunch"]);
        assert!(item.printer_ids().is_empty());
    }
}
