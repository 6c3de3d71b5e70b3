use std::collections::HashSet;
use std::sync::RwLock;

use shelfsort_core::{DomainResult, ProductId};
use shelfsort_products::{Product, ProductRepository};

/// In-memory product store for tests/dev.
///
/// Reads hand out clones and `save` stores clones, so nothing outside the
/// store ever aliases its contents.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Store seeded with copies of `products`.
    pub fn with_products(products: &[Product]) -> Self {
        Self {
            inner: RwLock::new(products.to_vec()),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get_all(&self) -> DomainResult<Vec<Product>> {
        match self.inner.read() {
            Ok(products) => Ok(products.clone()),
            Err(_) => Ok(vec![]),
        }
    }

    fn get_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        let wanted: HashSet<ProductId> = ids.iter().copied().collect();
        let products = match self.inner.read() {
            Ok(p) => p,
            Err(_) => return Ok(vec![]),
        };

        Ok(products
            .iter()
            .filter(|p| wanted.contains(&p.id()))
            .cloned()
            .collect())
    }

    fn save(&self, products: &[Product]) -> DomainResult<()> {
        if let Ok(mut stored) = self.inner.write() {
            *stored = products.to_vec();
            tracing::debug!(count = stored.len(), "replaced product collection");
        }
        Ok(())
    }
}
