use std::collections::HashMap;

use serde::Serialize;
use sqlx::SqliteConnection;

use crate::{
    Addition, Allergy, AvailabilityInput, CategoryInput, Component, Container, ItemInput,
    ItemNode, ItemSideInput, MenuExport, MenuInput, Modifier, PrinterInput,
    ReportingCategoryInput, Result, SideCategoryInput, SideItemInput, Substitution, Topping,
    Variation,
    command::{save, upsert_modifiers},
    query::rows,
};

/// Rows written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub menus: usize,
    pub categories: usize,
    pub items: usize,
    pub modifiers: usize,
    pub side_categories: usize,
    pub side_items: usize,
    pub printers: usize,
    pub reporting_categories: usize,
    /// Item sides dropped because their side category was not in the document.
    pub skipped_sides: usize,
}

/// Source id to target id translations built while importing.
#[derive(Default)]
struct Mapping {
    taxes: HashMap<i64, i64>,
    printers: HashMap<i64, i64>,
    reporting_categories: HashMap<i64, i64>,
    side_categories: HashMap<i64, i64>,
}

impl Mapping {
    fn tax(&self, id: Option<i64>) -> Option<i64> {
        id.and_then(|id| self.taxes.get(&id).copied())
    }

    fn reporting_category(&self, id: Option<i64>) -> Option<i64> {
        id.and_then(|id| self.reporting_categories.get(&id).copied())
    }

    fn side_category(&self, id: Option<i64>) -> Option<i64> {
        id.and_then(|id| self.side_categories.get(&id).copied())
    }

    fn printers(&self, ids: Vec<&str>) -> Vec<i64> {
        ids.into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .filter_map(|id| self.printers.get(&id).copied())
            .collect()
    }
}

async fn copy_modifiers<M: Modifier>(
    conn: &mut SqliteConnection,
    rows: &[M],
    item_id: i64,
) -> Result<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    let inputs = rows
        .iter()
        .map(|row| row.to_input(item_id))
        .collect::<Vec<_>>();

    Ok(upsert_modifiers::<M>(conn, &inputs).await?.len())
}

impl crate::Command {
    /// Copies an exported menu into `partner_id` in one transaction.
    ///
    /// Taxes are matched by type, printers by mac address and reporting
    /// categories by name. Item and side item SKUs are only kept when the
    /// document comes from another partner.
    #[tracing::instrument(skip(self, document), fields(source = document.partner_id))]
    pub async fn import_menu(
        &self,
        partner_id: i64,
        group_id: Option<i64>,
        document: MenuExport,
    ) -> Result<ImportSummary> {
        if partner_id <= 0 {
            crate::invalid!("partner id must be positive, got {partner_id}");
        }

        let copy_skus = document.partner_id != partner_id;
        let mut summary = ImportSummary::default();
        let mut mapping = Mapping::default();
        let mut tx = self.0.begin().await?;

        let target_taxes = rows::partner_taxes(&mut *tx, partner_id)
            .await?
            .into_iter()
            .map(|t| (t.tax_type, t.id))
            .collect::<HashMap<_, _>>();

        let source_taxes = document
            .taxes
            .iter()
            .chain(document.menus.iter().flat_map(|m| {
                m.categories
                    .iter()
                    .flat_map(|c| c.items.iter().filter_map(|i| i.tax.as_ref()))
            }));

        for tax in source_taxes {
            if let Some(id) = target_taxes.get(&tax.tax_type) {
                mapping.taxes.insert(tax.id, *id);
            }
        }

        let target_printers = rows::printers(&mut *tx, partner_id)
            .await?
            .into_iter()
            .map(|p| (p.mac_address, p.id))
            .collect::<HashMap<_, _>>();

        for printer in &document.printers {
            let id = match target_printers.get(&printer.mac_address) {
                Some(id) => *id,
                None => {
                    summary.printers += 1;
                    let input = PrinterInput {
                        id: None,
                        partner_id,
                        name: printer.name.to_owned(),
                        mac_address: printer.mac_address.to_owned(),
                        is_active: printer.is_active,
                    };
                    save(&mut *tx, &input).await?
                }
            };
            mapping.printers.insert(printer.id, id);
        }

        let target_reporting = rows::reporting_categories(&mut *tx, partner_id, group_id)
            .await?
            .into_iter()
            .map(|r| (r.name, r.id))
            .collect::<HashMap<_, _>>();

        for category in &document.reporting_categories {
            let id = match target_reporting.get(&category.name) {
                Some(id) => *id,
                None => {
                    summary.reporting_categories += 1;
                    let input = ReportingCategoryInput {
                        id: None,
                        partner_id,
                        partner_group_id: group_id,
                        name: category.name.to_owned(),
                        description: category.description.to_owned(),
                        is_active: category.is_active,
                    };
                    save(&mut *tx, &input).await?
                }
            };
            mapping.reporting_categories.insert(category.id, id);
        }

        for node in &document.side_categories {
            let input = SideCategoryInput {
                id: None,
                partner_id,
                name: node.category.name.to_owned(),
                label: node.category.label.to_owned(),
                reporting_category_id: mapping
                    .reporting_category(node.category.reporting_category_id),
            };
            let id = save(&mut *tx, &input).await?;
            mapping.side_categories.insert(node.category.id, id);
            summary.side_categories += 1;
        }

        for node in &document.side_categories {
            let Some(side_category_id) = mapping.side_category(Some(node.category.id)) else {
                continue;
            };

            for side_item in &node.side_items {
                let input = SideItemInput {
                    id: None,
                    side_category_id,
                    name: side_item.name.to_owned(),
                    price: side_item.price,
                    calories: side_item.calories,
                    is_default: side_item.is_default,
                    enable_customization: side_item.enable_customization,
                    side_customisation_id: mapping
                        .side_category(side_item.side_customisation_id),
                    side_customization_label: side_item.side_customization_label.to_owned(),
                    tax_id: mapping.tax(side_item.tax_id),
                    reporting_category_id: mapping
                        .reporting_category(side_item.reporting_category_id),
                    max_quantity_per_order: side_item.max_quantity_per_order,
                    side_item_sku: side_item.side_item_sku.to_owned().filter(|_| copy_skus),
                };
                save(&mut *tx, &input).await?;
                summary.side_items += 1;
            }
        }

        for node in &document.menus {
            let menu = &node.menu;
            let menu_id = save(
                &mut *tx,
                &MenuInput {
                    id: None,
                    partner_id,
                    menu_name: menu.menu_name.to_owned(),
                    partner_name: menu.partner_name.to_owned(),
                    sorting_index: menu.sorting_index,
                    pos_sorting_index: menu.pos_sorting_index,
                    is_active: menu.is_active,
                },
            )
            .await?;
            summary.menus += 1;

            for availability in &node.availabilities {
                let input = AvailabilityInput {
                    id: None,
                    menu_id,
                    day_of_week: availability.day_of_week,
                    start_time: availability.start_time.to_owned(),
                    end_time: availability.end_time.to_owned(),
                };
                save(&mut *tx, &input).await?;
            }

            for category_node in &node.categories {
                let category = &category_node.category;
                let category_id = save(
                    &mut *tx,
                    &CategoryInput {
                        id: None,
                        menu_id,
                        name: category.name.to_owned(),
                        description: category.description.to_owned(),
                        takeout_available: category.takeout_available,
                        is_active: category.is_active,
                        sorting_index: category.sorting_index,
                        pos_sorting_index: category.pos_sorting_index,
                        reporting_category_id: mapping
                            .reporting_category(category.reporting_category_id),
                    },
                )
                .await?;
                summary.categories += 1;

                for item_node in &category_node.items {
                    import_item(
                        &mut tx,
                        &mapping,
                        &mut summary,
                        partner_id,
                        category_id,
                        item_node,
                        copy_skus,
                    )
                    .await?;
                }
            }
        }

        tx.commit().await?;

        tracing::info!(
            menus = summary.menus,
            items = summary.items,
            skipped_sides = summary.skipped_sides,
            "menu imported"
        );

        Ok(summary)
    }
}

async fn import_item(
    conn: &mut SqliteConnection,
    mapping: &Mapping,
    summary: &mut ImportSummary,
    partner_id: i64,
    category_id: i64,
    node: &ItemNode,
    copy_skus: bool,
) -> Result<()> {
    let item = &node.item;
    let input = ItemInput {
        id: None,
        category_id,
        partner_id,
        name: item.name.to_owned(),
        description: item.description.to_owned(),
        price: item.price,
        item_sku: item.item_sku.to_owned().filter(|_| copy_skus),
        upc: item.upc.to_owned().filter(|_| copy_skus),
        is_active: item.is_active,
        is_archived: item.is_archived,
        tax_id: mapping.tax(item.tax_id),
        tags: item.tags().into_iter().map(str::to_owned).collect(),
        sorting_index: item.sorting_index,
        pos_sorting_index: item.pos_sorting_index,
        reporting_category_id: mapping.reporting_category(item.reporting_category_id),
        printer_ids: mapping.printers(item.printer_ids()),
        enable_special_instructions: item.enable_special_instructions,
        enable_modifiers: item.enable_modifiers,
        is_open_price: item.is_open_price,
        max_quantity_per_order: item.max_quantity_per_order,
        template_id: item.template_id,
    };
    let item_id = save(&mut *conn, &input).await?;
    summary.items += 1;

    let modifiers = &node.modifiers;
    let mut sides = Vec::with_capacity(modifiers.sides.len());
    for side in &modifiers.sides {
        let Some(side_category_id) = mapping.side_category(Some(side.side.side_category_id)) else {
            tracing::warn!(
                item = %item.name,
                side_category_id = side.side.side_category_id,
                "side category not in document, side skipped"
            );
            summary.skipped_sides += 1;
            continue;
        };

        sides.push(ItemSideInput {
            side_category_id,
            ..side.side.to_input(item_id)
        });
    }

    if !sides.is_empty() {
        summary.modifiers += upsert_modifiers::<crate::ItemSide>(&mut *conn, &sides)
            .await?
            .len();
    }

    summary.modifiers += copy_modifiers::<Variation>(&mut *conn, &modifiers.variations, item_id).await?;
    summary.modifiers += copy_modifiers::<Addition>(&mut *conn, &modifiers.additions, item_id).await?;
    summary.modifiers +=
        copy_modifiers::<Substitution>(&mut *conn, &modifiers.substitutions, item_id).await?;
    summary.modifiers += copy_modifiers::<Allergy>(&mut *conn, &modifiers.allergies, item_id).await?;
    summary.modifiers += copy_modifiers::<Topping>(&mut *conn, &modifiers.toppings, item_id).await?;
    summary.modifiers +=
        copy_modifiers::<Container>(&mut *conn, &modifiers.containers, item_id).await?;
    summary.modifiers +=
        copy_modifiers::<Component>(&mut *conn, &modifiers.components, item_id).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_skips_unknown_ids() {
        let mapping = Mapping {
            printers: HashMap::from([(4, 40), (5, 50)]),
            side_categories: HashMap::from([(1, 10)]),
            ..Default::default()
        };

        assert_eq!(mapping.printers(vec!["5", "x", "9", "4"]), vec![50, 40]);
        assert_eq!(mapping.side_category(Some(1)), Some(10));
        assert_eq!(mapping.side_category(Some(2)), None);
        assert_eq!(mapping.tax(None), None);
    }
}
