use shelfsort_products::Product;

use crate::sorter::{sorted_copy, SortDirection, Sorter};

/// Orders by the sales-per-view conversion ratio.
///
/// Unviewed products rank as ratio `0.0`; no secondary key separates them from
/// products that were viewed but never sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPerViewSorter {
    direction: SortDirection,
}

impl SalesPerViewSorter {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }
}

impl Sorter for SalesPerViewSorter {
    fn name(&self) -> &str {
        match self.direction {
            SortDirection::Ascending => "Sales per View (ascending)",
            SortDirection::Descending => "Sales per View (descending)",
        }
    }

    fn sort(&self, products: &[Product]) -> Vec<Product> {
        sorted_copy(products, self.direction, |a, b| {
            a.sales_per_view().total_cmp(&b.sales_per_view())
        })
    }
}
