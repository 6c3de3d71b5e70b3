use shelfsort_products::Product;

use crate::sorter::{sorted_copy, SortDirection, Sorter};

/// Orders by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSorter {
    direction: SortDirection,
}

impl PriceSorter {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }
}

impl Sorter for PriceSorter {
    fn name(&self) -> &str {
        match self.direction {
            SortDirection::Ascending => "Price (ascending)",
            SortDirection::Descending => "Price (descending)",
        }
    }

    fn sort(&self, products: &[Product]) -> Vec<Product> {
        sorted_copy(products, self.direction, |a, b| a.price().total_cmp(&b.price()))
    }
}
