//! Product store contract.

use std::sync::Arc;

use shelfsort_core::{DomainResult, ProductId};

use crate::product::Product;

/// Source of product records.
///
/// Every method hands out (or takes in) owned copies, so sorting a fetched
/// collection can never observe or cause mutation of the store's own state.
pub trait ProductRepository: Send + Sync {
    /// All stored products, in stored order.
    fn get_all(&self) -> DomainResult<Vec<Product>>;

    /// Stored products whose id appears in `ids`, in stored order.
    ///
    /// Unknown ids are ignored; an id requested twice is returned once.
    fn get_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>>;

    /// Replace the whole collection with copies of `products`.
    fn save(&self, products: &[Product]) -> DomainResult<()>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn get_all(&self) -> DomainResult<Vec<Product>> {
        (**self).get_all()
    }

    fn get_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        (**self).get_by_ids(ids)
    }

    fn save(&self, products: &[Product]) -> DomainResult<()> {
        (**self).save(products)
    }
}
