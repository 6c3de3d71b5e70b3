//! The sorting capability shared by every strategy.

use core::cmp::Ordering;

use shelfsort_products::Product;

/// A named, stateless ordering over products.
///
/// Implementations must be pure: the same input always yields the same output
/// and the input slice is never touched. Instances are immutable after
/// construction, so they are shared across threads behind an `Arc` without
/// further locking.
pub trait Sorter: Send + Sync + core::fmt::Debug {
    /// Registry key, e.g. `"Price (ascending)"`.
    fn name(&self) -> &str;

    /// Return a newly ordered copy of `products`.
    fn sort(&self, products: &[Product]) -> Vec<Product>;
}

/// Direction of a field ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Orient a natural-order comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Copy `products` and order the copy by `compare` in `direction`.
///
/// The sort is stable, so equal keys keep their input order in both directions.
pub(crate) fn sorted_copy<F>(products: &[Product], direction: SortDirection, compare: F) -> Vec<Product>
where
    F: Fn(&Product, &Product) -> Ordering,
{
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| direction.apply(compare(a, b)));
    sorted
}
