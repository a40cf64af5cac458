use menuhub_menu::{
    AvailabilityInput, Error, FetchOptions, ItemInput, ItemSideInput, MenuExport,
    PartnerTaxInput, PrinterInput, ReportingCategoryInput, SideCategoryInput, SideItemInput,
    Topping, ToppingInput,
};
use temp_dir::TempDir;

mod helpers;

struct Seeded {
    menu_id: i64,
    printer_id: i64,
}

async fn seed_partner(cmd: &menuhub_menu::Command) -> anyhow::Result<Seeded> {
    let (menu_id, category_id) = helpers::create_menu_with_category(cmd, 1).await?;
    cmd.save_availabilities(vec![AvailabilityInput {
        id: None,
        menu_id,
        day_of_week: 1,
        start_time: "11:00".to_owned(),
        end_time: "15:00".to_owned(),
    }])
    .await?;

    let tax_id = cmd
        .save_partner_tax(PartnerTaxInput {
            id: None,
            partner_id: 1,
            tax_type: "sales".to_owned(),
            rate: 7.0,
        })
        .await?;

    let printer_id = cmd
        .save_printer(PrinterInput {
            id: None,
            partner_id: 1,
            name: "Kitchen".to_owned(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_owned(),
            is_active: true,
        })
        .await?;

    let reporting_id = cmd
        .save_reporting_category(ReportingCategoryInput {
            partner_id: 1,
            name: "Food".to_owned(),
            is_active: true,
            ..Default::default()
        })
        .await?;

    let sauces = cmd
        .save_side_category(SideCategoryInput {
            partner_id: 1,
            name: "Sauces".to_owned(),
            ..Default::default()
        })
        .await?;
    let extras = cmd
        .save_side_category(SideCategoryInput {
            partner_id: 1,
            name: "Extras".to_owned(),
            ..Default::default()
        })
        .await?;
    cmd.save_side_item(SideItemInput {
        side_category_id: sauces,
        name: "Ketchup".to_owned(),
        side_item_sku: Some("KET-1".to_owned()),
        enable_customization: true,
        side_customisation_id: Some(extras),
        tax_id: Some(tax_id),
        ..Default::default()
    })
    .await?;

    let foreign = cmd
        .save_side_category(SideCategoryInput {
            partner_id: 3,
            name: "Borrowed".to_owned(),
            ..Default::default()
        })
        .await?;

    let item_id = cmd
        .save_item(ItemInput {
            item_sku: Some("BRG-1".to_owned()),
            tax_id: Some(tax_id),
            printer_ids: vec![printer_id],
            reporting_category_id: Some(reporting_id),
            ..helpers::item_input(1, category_id, "Burger")
        })
        .await?;
    cmd.save_item(ItemInput {
        is_archived: true,
        ..helpers::item_input(1, category_id, "Old burger")
    })
    .await?;

    cmd.save_item_sides(
        item_id,
        vec![
            ItemSideInput {
                side_category_id: sauces,
                ..Default::default()
            },
            ItemSideInput {
                side_category_id: foreign,
                ..Default::default()
            },
        ],
    )
    .await?;

    cmd.save_modifiers::<Topping>(vec![
        ToppingInput {
            item_id,
            topping_name: "cheese".to_owned(),
            ..Default::default()
        },
        ToppingInput {
            item_id,
            topping_name: "pickles".to_owned(),
            ..Default::default()
        },
    ])
    .await?;

    Ok(Seeded {
        menu_id,
        printer_id,
    })
}

#[tokio::test]
async fn test_export_menu() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let seeded = seed_partner(&cmd).await?;

    let export = query.export_menu(1, None).await?;
    assert_eq!(export.partner_id, 1);
    assert_eq!(export.menus.len(), 1);
    assert_eq!(export.menus[0].menu.id, seeded.menu_id);
    assert_eq!(export.menus[0].availabilities.len(), 1);
    assert_eq!(export.menus[0].categories[0].items.len(), 2);
    assert_eq!(export.side_categories.len(), 2);
    assert_eq!(export.printers[0].id, seeded.printer_id);
    assert_eq!(export.reporting_categories.len(), 1);
    assert_eq!(export.taxes.len(), 1);

    let err = query.export_menu(2, None).await.unwrap_err();
    assert!(matches!(err, Error::NotFound));

    Ok(())
}

#[tokio::test]
async fn test_import_into_other_partner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    seed_partner(&cmd).await?;

    let target_tax = cmd
        .save_partner_tax(PartnerTaxInput {
            id: None,
            partner_id: 2,
            tax_type: "sales".to_owned(),
            rate: 9.0,
        })
        .await?;

    let document = query.export_menu(1, None).await?.to_json()?;
    let summary = cmd
        .import_menu(2, None, MenuExport::from_json(&document)?)
        .await?;

    assert_eq!(summary.menus, 1);
    assert_eq!(summary.categories, 1);
    assert_eq!(summary.items, 2);
    assert_eq!(summary.side_categories, 2);
    assert_eq!(summary.side_items, 1);
    assert_eq!(summary.printers, 1);
    assert_eq!(summary.reporting_categories, 1);
    assert_eq!(summary.skipped_sides, 1);
    assert_eq!(summary.modifiers, 3);

    let menu = query.fetch_menu(2, FetchOptions::default()).await?;
    assert_eq!(menu.menus[0].availabilities[0].start_time, "11:00");

    let items = &menu.menus[0].categories[0].items;
    assert_eq!(items.len(), 1);

    let burger = &items[0];
    assert_eq!(burger.item.partner_id, 2);
    assert_eq!(burger.item.item_sku.as_deref(), Some("BRG-1"));
    assert_eq!(burger.item.tax_id, Some(target_tax));
    assert_eq!(burger.tax.as_ref().map(|t| t.rate), Some(9.0));
    assert_eq!(burger.modifiers.toppings.len(), 2);

    let sides: &[menuhub_menu::SideNode] = &burger.modifiers.sides;
    assert_eq!(sides.len(), 1);
    assert_eq!(sides[0].side_category.category.partner_id, 2);
    assert_eq!(sides[0].side_category.category.name, "Sauces");

    let ketchup = &sides[0].side_category.side_items[0];
    assert_eq!(ketchup.side_item_sku.as_deref(), Some("KET-1"));
    assert_eq!(ketchup.tax_id, Some(target_tax));

    let side_categories = query.side_categories(2).await?;
    let extras = side_categories
        .iter()
        .find(|c| c.category.name == "Extras")
        .map(|c| c.category.id);
    assert_eq!(ketchup.side_customisation_id, extras);

    let printers = query.export_menu(2, None).await?.printers;
    assert_eq!(printers.len(), 1);
    assert_eq!(
        burger.item.printer_ids(),
        vec![printers[0].id.to_string().as_str()]
    );

    let reporting = query.reporting_categories(2, None).await?;
    assert_eq!(burger.item.reporting_category_id, Some(reporting[0].id));

    Ok(())
}

#[tokio::test]
async fn test_import_into_same_partner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let seeded = seed_partner(&cmd).await?;

    let document = query.export_menu(1, None).await?;
    let summary = cmd.import_menu(1, None, document).await?;

    assert_eq!(summary.printers, 0);
    assert_eq!(summary.reporting_categories, 0);
    assert_eq!(summary.skipped_sides, 1);

    let menus = query.list_partner_menus(1).await?;
    assert_eq!(menus.len(), 2);

    let copy = menus
        .iter()
        .find(|m| m.id != seeded.menu_id)
        .map(|m| m.id)
        .unwrap();

    let menu = query
        .fetch_menu(1, FetchOptions::default().menu(copy))
        .await?;
    let burger = &menu.menus[0].categories[0].items[0];
    assert_eq!(burger.item.name, "Burger");
    assert_eq!(burger.item.item_sku, None);
    assert_eq!(
        burger.item.printer_ids(),
        vec![seeded.printer_id.to_string().as_str()]
    );
    assert!(
        burger.modifiers.sides[0]
            .side_category
            .side_items
            .iter()
            .all(|s| s.side_item_sku.is_none())
    );

    Ok(())
}

#[tokio::test]
async fn test_import_requires_partner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (query, cmd) = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    seed_partner(&cmd).await?;

    let document = query.export_menu(1, None).await?;
    let err = cmd.import_menu(0, None, document).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let menus = query.list_partner_menus(0).await?;
    assert!(menus.is_empty());

    Ok(())
}
