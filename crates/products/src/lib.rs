//! Products domain module.
//!
//! This crate contains the product value object and the contract of the store
//! that supplies products, implemented purely as deterministic domain logic
//! (no IO, no storage).

pub mod product;
pub mod repository;

pub use product::{parse_date, Product, DATE_FORMAT};
pub use repository::ProductRepository;
