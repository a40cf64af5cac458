use menuhub_menu::{
    Condition, Error, FetchOptions, ItemSideInput, PartnerTaxInput, SideCategoryInput,
    SideItemInput, Topping, ToppingInput, parse_partner_id,
};
use temp_dir::TempDir;

mod helpers;

fn topping(id: Option<i64>, item_id: i64, name: &str, sorting_index: Option<i64>) -> ToppingInput {
    ToppingInput {
        id,
        item_id,
        topping_name: name.to_owned(),
        price: 0.5,
        enable_topping: true,
        sorting_index,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_unknown_partner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    helpers::create_menu_with_category(&cmd, 1).await?;

    let err = query.fetch_menu(2, FetchOptions::default()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound));
    assert_eq!(err.to_string(), "not found");

    Ok(())
}

#[tokio::test]
async fn test_invalid_partner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, _) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    for partner_id in [0, -4] {
        let err = query
            .fetch_menu(partner_id, FetchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    assert!(matches!(parse_partner_id("abc"), Err(Error::Validation(_))));
    assert!(matches!(parse_partner_id(""), Err(Error::Validation(_))));

    Ok(())
}

#[tokio::test]
async fn test_archived_items_are_excluded() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let (menu_id, category_id) = helpers::create_menu_with_category(&cmd, 1).await?;
    let burger = helpers::create_item(&cmd, 1, category_id, "Burger").await?;
    cmd.save_item(menuhub_menu::ItemInput {
        is_archived: true,
        ..helpers::item_input(1, category_id, "Old burger")
    })
    .await?;

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    assert_eq!(menu.partner_id, 1);
    assert_eq!(menu.menus.len(), 1);
    assert_eq!(menu.menus[0].menu.id, menu_id);
    assert_eq!(menu.menus[0].categories.len(), 1);

    let items = &menu.menus[0].categories[0].items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item.id, burger);
    assert!(items[0].modifiers.is_empty());

    let pos = query.fetch_menu(1, FetchOptions::pos()).await?;
    assert_eq!(pos.menus[0].categories[0].items.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_modifiers_ordered_by_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let (_, category_id) = helpers::create_menu_with_category(&cmd, 1).await?;
    let item_id = helpers::create_item(&cmd, 1, category_id, "Pizza").await?;

    cmd.save_modifiers::<Topping>(vec![
        topping(Some(5), item_id, "olives", None),
        topping(Some(3), item_id, "ham", None),
        topping(Some(9), item_id, "basil", None),
    ])
    .await?;

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    let toppings = &menu.menus[0].categories[0].items[0].modifiers.toppings;
    let ids = toppings.iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 5, 9]);

    Ok(())
}

#[tokio::test]
async fn test_modifier_sort_index_dominates() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let (_, category_id) = helpers::create_menu_with_category(&cmd, 1).await?;
    let item_id = helpers::create_item(&cmd, 1, category_id, "Pizza").await?;

    let ids = cmd
        .save_modifiers::<Topping>(vec![
            topping(None, item_id, "olives", None),
            topping(None, item_id, "ham", Some(2)),
            topping(None, item_id, "basil", Some(1)),
        ])
        .await?;

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    let toppings = &menu.menus[0].categories[0].items[0].modifiers.toppings;
    let names = toppings
        .iter()
        .map(|t| t.topping_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["basil", "ham", "olives"]);
    assert_eq!(toppings[2].id, ids[0]);

    Ok(())
}

#[tokio::test]
async fn test_device_ordering_and_inactive_rows() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let menu_id = helpers::create_menu(&cmd, 1, "Dinner").await?;
    let mut categories = vec![];
    for (name, sorting_index, pos_sorting_index) in [
        ("Starters", Some(2), None),
        ("Mains", None, Some(1)),
        ("Desserts", Some(1), Some(0)),
    ] {
        let id = cmd
            .save_category(menuhub_menu::CategoryInput {
                menu_id,
                name: name.to_owned(),
                is_active: true,
                sorting_index,
                pos_sorting_index,
                ..Default::default()
            })
            .await?;
        categories.push(id);
    }

    let hidden = cmd
        .save_item(menuhub_menu::ItemInput {
            is_active: false,
            ..helpers::item_input(1, categories[2], "Seasonal pie")
        })
        .await?;

    let names = |menu: &menuhub_menu::MenuAggregate| {
        menu.menus[0]
            .categories
            .iter()
            .map(|c| c.category.name.to_owned())
            .collect::<Vec<_>>()
    };

    // Rows without a key come first
    let general = query.fetch_menu(1, FetchOptions::default()).await?;
    assert_eq!(names(&general), vec!["Mains", "Desserts", "Starters"]);

    // Only menus are filtered on the active flag
    let desserts = &general.menus[0].categories[1];
    assert_eq!(desserts.items.len(), 1);
    assert_eq!(desserts.items[0].item.id, hidden);
    assert!(!desserts.items[0].item.is_active);

    let pos = query
        .fetch_menu(1, FetchOptions::pos().menu(menu_id))
        .await?;
    assert_eq!(names(&pos), vec!["Starters", "Desserts", "Mains"]);
    assert_eq!(pos.menus[0].categories[1].items[0].item.id, hidden);

    cmd.set_menus_active(&[menu_id], false).await?;
    let err = query
        .fetch_menu(1, FetchOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
    assert_eq!(query.fetch_menu(1, FetchOptions::pos()).await?.menus.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_inactive_category_is_kept() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let menu_id = helpers::create_menu(&cmd, 1, "Lunch").await?;
    for (name, sorting_index, is_active) in [
        ("NoIdx", None, true),
        ("Idx1", Some(1), true),
        ("Inactive", Some(0), false),
    ] {
        cmd.save_category(menuhub_menu::CategoryInput {
            menu_id,
            name: name.to_owned(),
            is_active,
            sorting_index,
            ..Default::default()
        })
        .await?;
    }

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    let categories = menu.menus[0]
        .categories
        .iter()
        .map(|c| (c.category.name.as_str(), c.category.is_active))
        .collect::<Vec<_>>();
    assert_eq!(
        categories,
        vec![("NoIdx", true), ("Inactive", false), ("Idx1", true)]
    );

    Ok(())
}

#[tokio::test]
async fn test_menus_sorted_by_index_then_newest() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let breakfast = helpers::create_menu(&cmd, 1, "Breakfast").await?;
    let lunch = helpers::create_menu(&cmd, 1, "Lunch").await?;
    let brunch = cmd
        .save_menu(menuhub_menu::MenuInput {
            partner_id: 1,
            menu_name: "Brunch".to_owned(),
            sorting_index: Some(0),
            is_active: true,
            ..Default::default()
        })
        .await?;

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    let ids = menu.menus.iter().map(|m| m.menu.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![lunch, breakfast, brunch]);

    let menus = query.list_partner_menus(1).await?;
    assert_eq!(menus.len(), 3);
    assert!(query.is_menu_present_for_partner(1, lunch).await?);
    assert!(!query.is_menu_present_for_partner(2, lunch).await?);

    let only_lunch = query
        .fetch_menu(1, FetchOptions::default().menu(lunch))
        .await?;
    assert_eq!(only_lunch.menus.len(), 1);
    assert_eq!(only_lunch.menus[0].menu.menu_name, "Lunch");

    Ok(())
}

#[tokio::test]
async fn test_item_tax_and_sides() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let (_, category_id) = helpers::create_menu_with_category(&cmd, 1).await?;
    let tax_id = cmd
        .save_partner_tax(PartnerTaxInput {
            id: None,
            partner_id: 1,
            tax_type: "sales".to_owned(),
            rate: 8.25,
        })
        .await?;

    let item_id = cmd
        .save_item(menuhub_menu::ItemInput {
            tax_id: Some(tax_id),
            ..helpers::item_input(1, category_id, "Burger")
        })
        .await?;

    let sauces = cmd
        .save_side_category(SideCategoryInput {
            partner_id: 1,
            name: "Sauces".to_owned(),
            ..Default::default()
        })
        .await?;
    cmd.save_side_item(SideItemInput {
        side_category_id: sauces,
        name: "Ketchup".to_owned(),
        ..Default::default()
    })
    .await?;

    let drinks = cmd
        .save_side_category(SideCategoryInput {
            partner_id: 1,
            name: "Drinks".to_owned(),
            ..Default::default()
        })
        .await?;

    cmd.save_item_sides(
        item_id,
        vec![
            ItemSideInput {
                side_category_id: drinks,
                sorting_index: Some(1),
                ..Default::default()
            },
            ItemSideInput {
                side_category_id: sauces,
                required: true,
                sorting_index: Some(0),
                ..Default::default()
            },
        ],
    )
    .await?;

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    let item = &menu.menus[0].categories[0].items[0];
    assert_eq!(item.tax.as_ref().map(|t| t.rate), Some(8.25));
    assert_eq!(item.modifiers.sides.len(), 2);
    assert_eq!(item.modifiers.sides[0].side_category.category.name, "Sauces");
    assert_eq!(item.modifiers.sides[0].side_category.side_items.len(), 1);
    assert!(item.modifiers.sides[0].side.required);

    cmd.delete_side_category(Condition::Id(drinks)).await?;

    let menu = query.fetch_menu(1, FetchOptions::default()).await?;
    let sides = &menu.menus[0].categories[0].items[0].modifiers.sides;
    assert_eq!(sides.len(), 1);
    assert_eq!(sides[0].side.side_category_id, sauces);

    Ok(())
}

#[tokio::test]
async fn test_fetch_is_stable() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let (_, category_id) = helpers::create_menu_with_category(&cmd, 1).await?;
    for name in ["Burger", "Fries", "Shake"] {
        helpers::create_item(&cmd, 1, category_id, name).await?;
    }

    let first = query.fetch_menu(1, FetchOptions::default()).await?;
    let second = query.fetch_menu(1, FetchOptions::default()).await?;
    assert_eq!(first, second);

    let names = first.menus[0].categories[0]
        .items
        .iter()
        .map(|i| i.item.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Shake", "Fries", "Burger"]);

    let json = serde_json::to_value(&first)?;
    assert_eq!(json["menus"][0]["menu_name"], "Lunch");
    assert_eq!(json["menus"][0]["categories"][0]["items"][0]["name"], "Shake");

    Ok(())
}
