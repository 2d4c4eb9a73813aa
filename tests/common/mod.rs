//! Common test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use orders_analytics::{Cart, Category, Customer, OrderSnapshot, Price, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Path of a file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn product(name: &str, category: Category, price: Decimal) -> Product {
    Product::new(name, category, Price::new(price).expect("valid test price"))
}

pub fn andrew() -> Customer {
    Customer::new("ANDREW", "JOHNS", 18, dec!(2000.00))
}

pub fn jack() -> Customer {
    Customer::new("JACK", "SPARROW", 24, dec!(22000.00))
}

pub fn julia() -> Customer {
    Customer::new("JULIA", "SMITH", 22, dec!(2000.00))
}

pub fn tv() -> Product {
    product("TV", Category::Electronics, dec!(1200))
}

pub fn sofa() -> Product {
    product("SOFA", Category::Home, dec!(3200))
}

pub fn dishwasher() -> Product {
    product("DISHWASHER", Category::Agd, dec!(2000))
}

/// ANDREW {TV x1, SOFA x2}, JACK {SOFA x1}, JULIA {DISHWASHER x1}
pub fn basic_snapshot() -> OrderSnapshot {
    let mut andrews_cart = Cart::new();
    andrews_cart.add(tv(), 1).expect("valid quantity");
    andrews_cart.add(sofa(), 2).expect("valid quantity");

    vec![
        (andrew(), andrews_cart),
        (jack(), Cart::from_products(vec![sofa()]).unwrap()),
        (julia(), Cart::from_products(vec![dishwasher()]).unwrap()),
    ]
    .try_into()
    .unwrap()
}
