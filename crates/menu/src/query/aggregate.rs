use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    Addition, Allergy, Category, Component, Container, Item, ItemSide, Menu,
    MenuAvailability, Modifier, PartnerTax, Result, SideCategory, SideItem, Substitution, Topping,
    Variation, modifier::group_by_item, sort_rows,
};

use super::{FetchOptions, rows};

/// The read view of everything a partner sells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuAggregate {
    pub partner_id: i64,
    pub menus: Vec<MenuNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub menu: Menu,
    pub availabilities: Vec<MenuAvailability>,
    pub categories: Vec<CategoryNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<ItemNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemNode {
    #[serde(flatten)]
    pub item: Item,
    pub tax: Option<PartnerTax>,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub sides: Vec<SideNode>,
    pub variations: Vec<Variation>,
    pub additions: Vec<Addition>,
    pub substitutions: Vec<Substitution>,
    pub allergies: Vec<Allergy>,
    pub toppings: Vec<Topping>,
    pub containers: Vec<Container>,
    pub components: Vec<Component>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
            && self.variations.is_empty()
            && self.additions.is_empty()
            && self.substitutions.is_empty()
            && self.allergies.is_empty()
            && self.toppings.is_empty()
            && self.containers.is_empty()
            && self.components.is_empty()
    }
}

/// An item side resolved against its side category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideNode {
    #[serde(flatten)]
    pub side: ItemSide,
    pub side_category: SideCategoryNode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideCategoryNode {
    #[serde(flatten)]
    pub category: SideCategory,
    pub side_items: Vec<SideItem>,
}

impl super::Query {
    /// Assembles the menus of a partner down to item modifiers.
    ///
    /// Fails with `NotFound` when the partner has no menu matching `options`.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_menu(&self, partner_id: i64, options: FetchOptions) -> Result<MenuAggregate> {
        if partner_id <= 0 {
            crate::invalid!("partner id must be positive, got {partner_id}");
        }

        let menus = load_menus(&self.0, partner_id, options, false).await?;
        if menus.is_empty() {
            return Err(crate::Error::NotFound);
        }

        tracing::debug!(menus = menus.len(), "menu assembled");

        Ok(MenuAggregate { partner_id, menus })
    }

    /// One item with its tax and every modifier. Archived items are found
    /// too, `NotFound` when the item is gone.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_item(&self, item_id: i64) -> Result<ItemNode> {
        let Some(item) = self.find_item(item_id).await? else {
            return Err(crate::Error::NotFound);
        };

        let tax = match item.tax_id {
            Some(tax_id) => rows::taxes(&self.0, &[tax_id]).await?.into_iter().next(),
            None => None,
        };

        let mut modifiers = ModifierRows::load(&self.0, &[item.id]).await?;
        let side_categories = side_category_nodes(&self.0, modifiers.side_category_ids()).await?;

        Ok(ItemNode {
            modifiers: modifiers.take(item.id, &side_categories),
            tax,
            item,
        })
    }
}

pub(crate) async fn load_menus(
    pool: &SqlitePool,
    partner_id: i64,
    options: FetchOptions,
    with_archived: bool,
) -> Result<Vec<MenuNode>> {
    let device = options.device;
    let mut menus = rows::menus(pool, partner_id, options.menu_id, device).await?;
    if menus.is_empty() {
        return Ok(vec![]);
    }

    sort_rows(&mut menus, device);

    let menu_ids = menus.iter().map(|m| m.id).collect::<Vec<_>>();
    let availabilities = rows::availabilities(pool, &menu_ids).await?;

    let mut categories = rows::categories(pool, &menu_ids).await?;
    sort_rows(&mut categories, device);

    let category_ids = categories.iter().map(|c| c.id).collect::<Vec<_>>();
    let mut items = rows::items(pool, &category_ids, with_archived).await?;
    sort_rows(&mut items, device);

    let tax_ids = items
        .iter()
        .filter_map(|i| i.tax_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let taxes = rows::taxes(pool, &tax_ids)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect::<HashMap<_, _>>();

    let item_ids = items.iter().map(|i| i.id).collect::<Vec<_>>();
    let mut modifiers = ModifierRows::load(pool, &item_ids).await?;
    let side_categories = side_category_nodes(pool, modifiers.side_category_ids()).await?;

    let mut item_nodes = HashMap::<i64, Vec<ItemNode>>::new();
    for item in items {
        let tax = item.tax_id.and_then(|id| taxes.get(&id).cloned());
        let node = ItemNode {
            modifiers: modifiers.take(item.id, &side_categories),
            tax,
            item,
        };
        item_nodes.entry(node.item.category_id).or_default().push(node);
    }

    let mut category_nodes = HashMap::<i64, Vec<CategoryNode>>::new();
    for category in categories {
        let node = CategoryNode {
            items: item_nodes.remove(&category.id).unwrap_or_default(),
            category,
        };
        category_nodes.entry(node.category.menu_id).or_default().push(node);
    }

    let mut availabilities_by_menu = HashMap::<i64, Vec<MenuAvailability>>::new();
    for availability in availabilities {
        availabilities_by_menu
            .entry(availability.menu_id)
            .or_default()
            .push(availability);
    }

    Ok(menus
        .into_iter()
        .map(|menu| MenuNode {
            availabilities: availabilities_by_menu.remove(&menu.id).unwrap_or_default(),
            categories: category_nodes.remove(&menu.id).unwrap_or_default(),
            menu,
        })
        .collect())
}

pub(crate) async fn side_category_nodes(
    pool: &SqlitePool,
    ids: Vec<i64>,
) -> Result<HashMap<i64, SideCategoryNode>> {
    let categories = rows::side_categories(pool, None, Some(&ids)).await?;

    Ok(attach_side_items(pool, categories)
        .await?
        .into_iter()
        .map(|node| (node.category.id, node))
        .collect())
}

pub(crate) async fn attach_side_items(
    pool: &SqlitePool,
    categories: Vec<SideCategory>,
) -> Result<Vec<SideCategoryNode>> {
    let ids = categories.iter().map(|c| c.id).collect::<Vec<_>>();
    let mut side_items = HashMap::<i64, Vec<SideItem>>::new();
    for side_item in rows::side_items(pool, &ids).await? {
        side_items
            .entry(side_item.side_category_id)
            .or_default()
            .push(side_item);
    }

    Ok(categories
        .into_iter()
        .map(|category| SideCategoryNode {
            side_items: side_items.remove(&category.id).unwrap_or_default(),
            category,
        })
        .collect())
}

struct ModifierRows {
    sides: HashMap<i64, Vec<ItemSide>>,
    variations: HashMap<i64, Vec<Variation>>,
    additions: HashMap<i64, Vec<Addition>>,
    substitutions: HashMap<i64, Vec<Substitution>>,
    allergies: HashMap<i64, Vec<Allergy>>,
    toppings: HashMap<i64, Vec<Topping>>,
    containers: HashMap<i64, Vec<Container>>,
    components: HashMap<i64, Vec<Component>>,
}

async fn load_kind<M: Modifier>(pool: &SqlitePool, item_ids: &[i64]) -> Result<HashMap<i64, Vec<M>>> {
    Ok(group_by_item(rows::modifiers::<_, M>(pool, item_ids).await?))
}

impl ModifierRows {
    async fn load(pool: &SqlitePool, item_ids: &[i64]) -> Result<Self> {
        let (sides, variations, additions, substitutions, allergies, toppings, containers, components) =
            futures::try_join!(
                load_kind::<ItemSide>(pool, item_ids),
                load_kind::<Variation>(pool, item_ids),
                load_kind::<Addition>(pool, item_ids),
                load_kind::<Substitution>(pool, item_ids),
                load_kind::<Allergy>(pool, item_ids),
                load_kind::<Topping>(pool, item_ids),
                load_kind::<Container>(pool, item_ids),
                load_kind::<Component>(pool, item_ids),
            )?;

        Ok(Self {
            sides,
            variations,
            additions,
            substitutions,
            allergies,
            toppings,
            containers,
            components,
        })
    }

    fn side_category_ids(&self) -> Vec<i64> {
        self.sides
            .values()
            .flatten()
            .map(|s| s.side_category_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect()
    }

    fn take(&mut self, item_id: i64, side_categories: &HashMap<i64, SideCategoryNode>) -> Modifiers {
        let sides = self
            .sides
            .remove(&item_id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|side| {
                let Some(side_category) = side_categories.get(&side.side_category_id) else {
                    tracing::debug!(
                        item_id,
                        side_category_id = side.side_category_id,
                        "side category missing, side skipped"
                    );
                    return None;
                };

                Some(SideNode {
                    side,
                    side_category: side_category.clone(),
                })
            })
            .collect();

        Modifiers {
            sides,
            variations: self.variations.remove(&item_id).unwrap_or_default(),
            additions: self.additions.remove(&item_id).unwrap_or_default(),
            substitutions: self.substitutions.remove(&item_id).unwrap_or_default(),
            allergies: self.allergies.remove(&item_id).unwrap_or_default(),
            toppings: self.toppings.remove(&item_id).unwrap_or_default(),
            containers: self.containers.remove(&item_id).unwrap_or_default(),
            components: self.components.remove(&item_id).unwrap_or_default(),
        }
    }
}
