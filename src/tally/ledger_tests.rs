use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::ledger::{Ledger, DEFAULT_UNIT_PRICE};

#[test]
fn test_new_ledger() {
    let ledger = Ledger::new();

    assert!(ledger.products().is_empty());
    assert_eq!(ledger.default_product(), "Ginseng and Honey");
    assert_eq!(ledger.sum_count(), 0);
    assert_eq!(ledger.sum_cost(), dec!(0));
}

#[test]
fn test_increment_unknown_product() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Green Tea", 2, None);

    let product = ledger.product("Green Tea").unwrap();
    assert_eq!(product.total_count(), 2);
    assert_eq!(product.unit_price(), DEFAULT_UNIT_PRICE);
    assert_eq!(product.total_cost(), dec!(1.98));
}

#[test]
fn test_increment_unknown_product_with_price() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 3, Some(dec!(1.50)));

    let product = ledger.product("Sweet Tea").unwrap();
    assert_eq!(product.total_count(), 3);
    assert_eq!(product.total_cost(), dec!(4.50));
    assert_eq!(product.unit_price(), dec!(1.50));
}

#[test]
fn test_increment_known_product() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 3, Some(dec!(1.50)));
    ledger.increment_product("Sweet Tea", 2, None);

    let product = ledger.product("Sweet Tea").unwrap();
    assert_eq!(product.total_count(), 5);
    assert_eq!(product.total_cost(), dec!(7.50));
    assert_eq!(product.unit_price(), dec!(1.50));
}

#[test]
fn test_increment_price_override_is_one_off() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 1, Some(dec!(1.50)));
    ledger.increment_product("Sweet Tea", 2, Some(dec!(3.00)));

    let product = ledger.product("Sweet Tea").unwrap();
    assert_eq!(product.total_cost(), dec!(7.50));
    assert_eq!(product.unit_price(), dec!(1.50));

    // the next unpriced purchase falls back to the standing price
    ledger.increment_product("Sweet Tea", 1, None);
    assert_eq!(ledger.product("Sweet Tea").unwrap().total_cost(), dec!(9.00));
}

#[test]
fn test_increment_returns_product() {
    let mut ledger = Ledger::new();

    let product = ledger.increment_product("Green Tea", 2, None);
    assert_eq!(product.name(), "Green Tea");
    assert_eq!(product.total_count(), 2);

    let product = ledger.increment_product("Green Tea", 1, None);
    assert_eq!(product.total_count(), 3);
}

#[test]
fn test_negative_and_zero_counts() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 3, Some(dec!(1.00)));
    ledger.increment_product("Sweet Tea", -2, None);
    ledger.increment_product("Sweet Tea", 0, None);

    let product = ledger.product("Sweet Tea").unwrap();
    assert_eq!(product.total_count(), 1);
    assert_eq!(product.total_cost(), dec!(1.00));
}

#[test]
fn test_sums() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 3, Some(dec!(1.50)));
    ledger.increment_product("Mucho Mango", 2, None);
    ledger.increment_product("Sweet Tea", 1, Some(dec!(2.00)));
    ledger.increment_product("Green Tea", 4, Some(dec!(0.50)));

    assert_eq!(ledger.sum_count(), 10);
    // 4.50 + 1.98 + 2.00 + 2.00
    assert_eq!(ledger.sum_cost(), dec!(10.48));
}

#[test]
fn test_change_price() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 3, Some(dec!(1.50)));
    ledger.change_price("Sweet Tea", dec!(2.00));

    let product = ledger.product("Sweet Tea").unwrap();
    assert_eq!(product.unit_price(), dec!(2.00));
    assert_eq!(product.total_count(), 3);
    assert_eq!(product.total_cost(), dec!(4.50));

    ledger.increment_product("Sweet Tea", 1, None);
    assert_eq!(ledger.product("Sweet Tea").unwrap().total_cost(), dec!(6.50));
}

#[test]
fn test_change_price_unknown_product() {
    let mut ledger = Ledger::new();
    ledger.change_price("Lemonade", dec!(1.25));

    let product = ledger.product("Lemonade").unwrap();
    assert_eq!(product.total_count(), 0);
    assert_eq!(product.total_cost(), dec!(0));
    assert_eq!(product.unit_price(), dec!(1.25));
    assert_eq!(ledger.products().len(), 1);
}

#[test]
fn test_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 1, None);
    ledger.increment_product("Mucho Mango", 1, None);
    ledger.change_price("Lemonade", dec!(1.25));
    ledger.increment_product("Sweet Tea", 1, None);

    let names: Vec<&str> = ledger.products().iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, ["Sweet Tea", "Mucho Mango", "Lemonade"]);
}

#[test]
fn test_names_case_sensitive() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Sweet Tea", 1, None);
    ledger.increment_product("sweet tea", 2, None);

    assert_eq!(ledger.products().len(), 2);
    assert_eq!(ledger.product("Sweet Tea").unwrap().total_count(), 1);
    assert_eq!(ledger.product("sweet tea").unwrap().total_count(), 2);
    assert!(ledger.product("SWEET TEA").is_none());
}

#[test]
fn test_set_default_product() {
    let mut ledger = Ledger::new();
    ledger.increment_product("Mate", 1, None);
    ledger.set_default_product("Mate");

    assert_eq!(ledger.default_product(), "Mate");
    assert_eq!(ledger.products().len(), 1);
    assert_eq!(ledger.sum_count(), 1);
}
