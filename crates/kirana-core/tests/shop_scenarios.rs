//! End-to-end scenarios against the `Shop` aggregate.

use kirana_core::{CoreError, Money, Product, ProductId, ProductUpdate, Shop, DEFAULT_STOCK};

const PEN: ProductId = ProductId::new(1);
const NOTEBOOK: ProductId = ProductId::new(2);

fn seeded() -> Shop {
    Shop::with_seed_catalog(DEFAULT_STOCK).unwrap()
}

#[test]
fn pen_sale_from_browse_to_history() {
    let mut shop = seeded();

    let category = shop.category_at(2).unwrap();
    assert_eq!(category, "Stationery");

    let added = shop.add_to_cart_from(&category, PEN, 5).unwrap();
    assert_eq!(added.remaining_stock, 15);
    assert_eq!(shop.cart().quantity_of(PEN), 5);
    assert_eq!(shop.cart().total(), Money::from_rupees(50));

    let bill = shop.checkout().unwrap();
    assert_eq!(bill.total, Money::from_rupees(50));

    let history: Vec<_> = shop
        .history()
        .records()
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(history, vec!["Pen x5 = ₹50.00"]);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.find_product(PEN).unwrap().stock, 15);
}

#[test]
fn repeated_adds_never_exceed_original_stock() {
    let mut shop = seeded();

    shop.add_to_cart(PEN, 8).unwrap();
    shop.add_to_cart(PEN, 12).unwrap();
    assert_eq!(shop.cart().quantity_of(PEN), 20);
    assert_eq!(shop.catalog().stock_of(PEN), Some(0));

    let err = shop.add_to_cart(PEN, 1).unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidQuantity {
            requested: 1,
            available: 0
        }
    );
    assert_eq!(shop.cart().quantity_of(PEN), 20);
}

#[test]
fn checkout_writes_one_record_per_line_in_cart_order() {
    let mut shop = seeded();
    shop.add_to_cart(NOTEBOOK, 2).unwrap();
    shop.add_to_cart(PEN, 3).unwrap();
    shop.add_to_cart(NOTEBOOK, 1).unwrap();

    let bill = shop.checkout().unwrap();
    let lines: Vec<_> = bill.lines.iter().map(|l| l.to_string()).collect();
    assert_eq!(lines, vec!["Notebook x3 = ₹120.00", "Pen x3 = ₹30.00"]);

    let sum: Money = bill.lines.iter().map(|l| l.amount).sum();
    assert_eq!(bill.total, sum);
    assert!(bill.lines.iter().all(|l| l.bill_id == bill.id));
    assert_eq!(shop.history().revenue(), Money::from_rupees(150));
}

#[test]
fn bills_accumulate_in_history() {
    let mut shop = seeded();
    shop.add_to_cart(PEN, 1).unwrap();
    let first = shop.checkout().unwrap();
    shop.add_to_cart(NOTEBOOK, 1).unwrap();
    let second = shop.checkout().unwrap();

    assert_ne!(first.id, second.id);
    let names: Vec<_> = shop
        .history()
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Pen", "Notebook"]);
}

#[test]
fn created_product_is_browsable_and_searchable() {
    let mut shop = seeded();
    let id = ProductId::new(6);
    shop.add_product(Product::new(id, "Desk Lamp", "Home", Money::from_paise(129_950)))
        .unwrap();

    let found = shop.find_product(id).unwrap();
    assert_eq!(found.product.name, "Desk Lamp");
    assert_eq!(found.stock, 20);

    assert_eq!(shop.categories(), vec!["Electronics", "Home", "Stationery"]);
    assert_eq!(shop.search_by_name("lamp").len(), 1);
}

#[test]
fn duplicate_create_leaves_original_untouched() {
    let mut shop = seeded();
    shop.add_to_cart(PEN, 4).unwrap();

    let err = shop
        .add_product(Product::new(PEN, "Marker", "Office", Money::from_rupees(30)))
        .unwrap_err();
    assert_eq!(err, CoreError::DuplicateProduct(PEN));

    let pen = shop.find_product(PEN).unwrap();
    assert_eq!(pen.product.name, "Pen");
    assert_eq!(pen.stock, 16);
    assert!(!shop.categories().contains(&"Office"));
}

#[test]
fn update_then_browse_reflects_new_category() {
    let mut shop = seeded();
    let update = ProductUpdate::from_input("", "Office", None);
    let updated = shop.update_product(NOTEBOOK, update).unwrap();
    assert_eq!(updated.category, "Office");

    let office: Vec<_> = shop
        .products_in("Office")
        .into_iter()
        .map(|s| s.product.id)
        .collect();
    assert_eq!(office, vec![NOTEBOOK]);
    assert!(shop.add_to_cart_from("Stationery", NOTEBOOK, 1).is_err());
    assert!(shop.add_to_cart_from("Office", NOTEBOOK, 1).is_ok());
}

#[test]
fn delete_removes_lookup_and_stock() {
    let mut shop = seeded();
    shop.delete_product(PEN).unwrap();

    assert_eq!(
        shop.find_product(PEN).unwrap_err(),
        CoreError::ProductNotFound(PEN)
    );
    assert!(shop.stock_levels().iter().all(|s| s.product.id != PEN));
    assert_eq!(shop.categories(), vec!["Electronics", "Stationery"]);
    assert_eq!(
        shop.delete_product(PEN).unwrap_err(),
        CoreError::ProductNotFound(PEN)
    );
}

#[test]
fn search_returns_all_and_only_matches() {
    let shop = seeded();
    let ids: Vec<_> = shop
        .search_by_name("O")
        .into_iter()
        .map(|s| s.product.id.get())
        .collect();
    // Notebook, Laptop
    assert_eq!(ids, vec![2, 3]);
    assert!(shop.search_by_name("xyz").is_empty());
}

#[test]
fn custom_default_stock_applies_to_seed_and_new_products() {
    let mut shop = Shop::with_seed_catalog(5).unwrap();
    assert_eq!(shop.find_product(PEN).unwrap().stock, 5);

    shop.add_product(Product::new(ProductId::new(9), "Stapler", "Stationery", Money::from_rupees(90)))
        .unwrap();
    assert_eq!(shop.catalog().stock_of(ProductId::new(9)), Some(5));
}

#[test]
fn recreated_product_never_merges_into_deleted_line() {
    let mut shop = seeded();
    shop.add_to_cart(PEN, 2).unwrap();
    shop.delete_product(PEN).unwrap();
    shop.add_product(Product::new(PEN, "Marker", "Office", Money::from_rupees(30)))
        .unwrap();

    let added = shop.add_to_cart(PEN, 3).unwrap();
    assert_eq!(added.cart_quantity, 3);
    assert_eq!(shop.cart().item_count(), 2);

    let bill = shop.checkout().unwrap();
    let lines: Vec<_> = bill.lines.iter().map(|l| l.to_string()).collect();
    assert_eq!(lines, vec!["Pen x2 = ₹20.00", "Marker x3 = ₹90.00"]);
    assert_eq!(bill.total, Money::from_rupees(110));
}

#[test]
fn undo_returns_stock_only_to_the_product_it_came_from() {
    let mut shop = seeded();
    shop.add_to_cart(PEN, 2).unwrap();
    shop.delete_product(PEN).unwrap();
    shop.add_product(Product::new(PEN, "Marker", "Office", Money::from_rupees(30)))
        .unwrap();
    shop.add_to_cart(PEN, 4).unwrap();

    // Marker's own addition goes back to Marker.
    let outcome = shop.undo_last().unwrap();
    assert_eq!(outcome.restored_stock, Some(20));

    // Pen's addition only leaves the cart.
    let outcome = shop.undo_last().unwrap();
    assert_eq!(outcome.action.name, "Pen");
    assert_eq!(outcome.restored_stock, None);
    assert_eq!(shop.catalog().stock_of(PEN), Some(20));
    assert!(shop.cart().is_empty());
}

#[test]
fn cart_and_bill_use_current_price() {
    let mut shop = seeded();
    shop.add_to_cart(PEN, 5).unwrap();
    shop.update_product(PEN, ProductUpdate::from_input("Gel Pen", "", Some(Money::from_rupees(12))))
        .unwrap();

    let line = shop.cart().line(PEN).unwrap();
    assert_eq!(line.product.name, "Gel Pen");
    assert_eq!(shop.cart().total(), Money::from_rupees(60));

    let bill = shop.checkout().unwrap();
    assert_eq!(bill.lines[0].to_string(), "Gel Pen x5 = ₹60.00");
}

#[test]
fn non_positive_price_update_keeps_current_price() {
    let mut shop = seeded();
    let update = ProductUpdate::from_input("Gel Pen", "", Some(Money::from_rupees(-5)));
    let updated = shop.update_product(PEN, update).unwrap();

    assert_eq!(updated.name, "Gel Pen");
    assert_eq!(updated.price, Money::from_rupees(10));
}

#[test]
fn whitespace_query_matches_names_with_spaces() {
    let shop = seeded();
    let ids: Vec<_> = shop
        .search_by_name(" ")
        .into_iter()
        .map(|s| s.product.id.get())
        .collect();
    assert_eq!(ids, vec![5]);
}
