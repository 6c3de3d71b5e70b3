use core::cmp::Ordering;

use shelfsort_products::Product;

use crate::sorter::{sorted_copy, SortDirection, Sorter};

/// Orders by display name, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameSorter {
    direction: SortDirection,
}

impl NameSorter {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }
}

fn compare_ignoring_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl Sorter for NameSorter {
    fn name(&self) -> &str {
        match self.direction {
            SortDirection::Ascending => "Name (ascending)",
            SortDirection::Descending => "Name (descending)",
        }
    }

    fn sort(&self, products: &[Product]) -> Vec<Product> {
        sorted_copy(products, self.direction, |a, b| compare_ignoring_case(a.name(), b.name()))
    }
}
