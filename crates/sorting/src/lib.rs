//! Named product orderings, the registry that looks them up, the enable
//! policy that gates them, and pagination of the ordered result.
//!
//! Flow: caller names a sorter → [`ProductSorter`] resolves it through a
//! [`SorterRegistry`] → the active [`SorterConfig`] decides whether it may run →
//! the [`Sorter`] produces a new ordered `Vec` → [`paginate`] cuts a page.

pub mod config;
pub mod error;
pub mod pagination;
pub mod registry;
pub mod sorter;
pub mod strategies;
pub mod use_case;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{SorterConfig, DEFAULT_PAGE_SIZE};
pub use error::SortError;
pub use pagination::{paginate, PaginatedResult, PaginationOptions};
pub use registry::{register_default_sorters, InMemorySorterRegistry, SorterRegistry};
pub use sorter::{SortDirection, Sorter};
pub use strategies::{DateSorter, NameSorter, PriceSorter, SalesPerViewSorter};
pub use use_case::ProductSorter;
