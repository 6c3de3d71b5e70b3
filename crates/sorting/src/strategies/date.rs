use shelfsort_products::Product;

use crate::sorter::{sorted_copy, SortDirection, Sorter};

/// Orders by creation date (calendar day granularity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSorter {
    direction: SortDirection,
}

impl DateSorter {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }
}

impl Sorter for DateSorter {
    fn name(&self) -> &str {
        match self.direction {
            SortDirection::Ascending => "Creation Date (ascending)",
            SortDirection::Descending => "Creation Date (descending)",
        }
    }

    fn sort(&self, products: &[Product]) -> Vec<Product> {
        sorted_copy(products, self.direction, |a, b| a.created().cmp(&b.created()))
    }
}
