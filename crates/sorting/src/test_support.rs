//! Fixtures shared by the unit tests of this crate.

use chrono::NaiveDate;
use shelfsort_core::ProductId;
use shelfsort_products::Product;

pub(crate) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub(crate) fn product(id: i64, name: &str, price: f64, created: &str, sales: u64, views: u64) -> Product {
    Product::new(ProductId::new(id), name, price, date(created), sales, views).unwrap()
}

/// The three-product catalog the storefront demo ships with.
pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Alabaster Table", 12.99, "2019-01-04", 32, 730),
        product(2, "Zebra Table", 44.49, "2012-01-04", 301, 3279),
        product(3, "Coffee Table", 10.00, "2014-05-28", 1048, 20123),
    ]
}

pub(crate) fn numbered_products(count: usize) -> Vec<Product> {
    (1..=count as i64)
        .map(|i| product(i, &format!("Product {i}"), i as f64, "2020-01-01", 0, 0))
        .collect()
}

pub(crate) fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id().get()).collect()
}
