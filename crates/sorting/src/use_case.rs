//! Named sort requests gated by the enable policy.

use std::sync::{Arc, RwLock};

use shelfsort_products::Product;

use crate::config::SorterConfig;
use crate::error::SortError;
use crate::pagination::{paginate, PaginatedResult, PaginationOptions};
use crate::registry::SorterRegistry;

/// Resolves sorter names through a registry and applies the active
/// [`SorterConfig`] before running them.
///
/// The registry is injected; the configuration is an immutable snapshot that
/// [`ProductSorter::set_config`] swaps as a whole. `None` means nothing is
/// disabled.
#[derive(Debug)]
pub struct ProductSorter<R> {
    registry: R,
    config: RwLock<Option<Arc<SorterConfig>>>,
}

impl<R> ProductSorter<R>
where
    R: SorterRegistry,
{
    /// Starts with [`SorterConfig::default`] (everything enabled).
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            config: RwLock::new(Some(Arc::new(SorterConfig::default()))),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Replace the active configuration. No merging with the previous one.
    pub fn set_config(&self, config: Option<Arc<SorterConfig>>) {
        let mut slot = match self.config.write() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = config;
    }

    pub fn config(&self) -> Option<Arc<SorterConfig>> {
        match self.config.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Order `products` with the sorter registered under `name`.
    pub fn sort_products(&self, products: &[Product], name: &str) -> Result<Vec<Product>, SortError> {
        let Some(sorter) = self.registry.get(name) else {
            tracing::debug!(sorter = %name, "sorter not found");
            return Err(SortError::NotFound(name.to_string()));
        };

        if !self.is_enabled(name) {
            tracing::debug!(sorter = %name, "sorter is disabled by configuration");
            return Err(SortError::Disabled(name.to_string()));
        }

        tracing::debug!(sorter = %name, items = products.len(), "sorting products");
        Ok(sorter.sort(products))
    }

    /// Sort, then cut the requested page.
    ///
    /// A non-positive page size is replaced by the configured
    /// `default_page_size` before pagination normalizes the request.
    pub fn sort_and_paginate(
        &self,
        products: &[Product],
        name: &str,
        options: PaginationOptions,
    ) -> Result<PaginatedResult<Product>, SortError> {
        let sorted = self.sort_products(products, name)?;

        let mut options = options;
        if options.page_size < 1 {
            if let Some(config) = self.config() {
                options.page_size = i64::try_from(config.page_size()).unwrap_or(i64::MAX);
            }
        }

        Ok(paginate(&sorted, options))
    }

    /// Names of every registered sorter the configuration does not disable,
    /// in no particular order.
    pub fn available_sorters(&self) -> Vec<String> {
        let config = self.config();
        self.registry
            .all()
            .iter()
            .map(|sorter| sorter.name())
            .filter(|name| !config.as_ref().is_some_and(|c| c.is_disabled(name)))
            .map(String::from)
            .collect()
    }

    fn is_enabled(&self, name: &str) -> bool {
        match self.config() {
            Some(config) => !config.is_disabled(name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::registry::InMemorySorterRegistry;
    use crate::test_support::{ids, numbered_products, sample_products};

    fn use_case() -> ProductSorter<InMemorySorterRegistry> {
        ProductSorter::new(InMemorySorterRegistry::with_defaults())
    }

    fn names(sorter: &ProductSorter<InMemorySorterRegistry>) -> BTreeSet<String> {
        sorter.available_sorters().into_iter().collect()
    }

    #[test]
    fn sorts_with_registered_sorter() {
        let sorted = use_case()
            .sort_products(&sample_products(), "Price (ascending)")
            .unwrap();
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn unknown_sorter_is_not_found() {
        let err = use_case()
            .sort_products(&sample_products(), "Nonexistent Sorter")
            .unwrap_err();
        assert_eq!(err, SortError::NotFound("Nonexistent Sorter".to_string()));
        assert_eq!(err.to_string(), "sorter not found: Nonexistent Sorter");
    }

    #[test]
    fn disabled_sorter_fails_until_re_enabled() {
        let sorter = use_case();
        sorter.set_config(Some(Arc::new(SorterConfig::with_disabled(["Price (ascending)"]))));

        let err = sorter
            .sort_products(&sample_products(), "Price (ascending)")
            .unwrap_err();
        assert_eq!(err, SortError::Disabled("Price (ascending)".to_string()));
        assert_eq!(err.sorter_name(), "Price (ascending)");

        // Other sorters are unaffected.
        assert!(sorter.sort_products(&sample_products(), "Price (descending)").is_ok());

        sorter.set_config(Some(Arc::new(SorterConfig::default())));
        assert!(sorter.sort_products(&sample_products(), "Price (ascending)").is_ok());
    }

    #[test]
    fn missing_sorter_reports_not_found_even_if_listed_as_disabled() {
        let sorter = use_case();
        sorter.set_config(Some(Arc::new(SorterConfig::with_disabled(["Ghost"]))));
        let err = sorter.sort_products(&sample_products(), "Ghost").unwrap_err();
        assert!(matches!(err, SortError::NotFound(_)));
    }

    #[test]
    fn no_config_means_everything_enabled() {
        let sorter = use_case();
        sorter.set_config(None);
        assert!(sorter.config().is_none());
        assert_eq!(names(&sorter).len(), 8);
        assert!(sorter.sort_products(&sample_products(), "Name (descending)").is_ok());
    }

    #[test]
    fn available_sorters_excludes_disabled_names() {
        let sorter = use_case();
        assert_eq!(names(&sorter).len(), 8);

        sorter.set_config(Some(Arc::new(SorterConfig::with_disabled([
            "Price (ascending)",
            "Name (descending)",
        ]))));

        let available = names(&sorter);
        assert_eq!(available.len(), 6);
        assert!(!available.contains("Price (ascending)"));
        assert!(!available.contains("Name (descending)"));
        assert!(available.contains("Price (descending)"));
    }

    #[test]
    fn set_config_replaces_wholesale() {
        let sorter = use_case();
        let first = Arc::new(SorterConfig::with_disabled(["A", "B"]));
        sorter.set_config(Some(first.clone()));
        assert!(Arc::ptr_eq(&sorter.config().unwrap(), &first));

        let second = Arc::new(SorterConfig::with_disabled(["C"]));
        sorter.set_config(Some(second));
        let active = sorter.config().unwrap();
        assert_eq!(active.disabled_sorters, vec!["C".to_string()]);
    }

    #[test]
    fn registry_accessor_exposes_injected_registry() {
        let sorter = use_case();
        assert_eq!(sorter.registry().len(), 8);
    }

    #[test]
    fn sorting_does_not_mutate_caller_input() {
        let products = sample_products();
        let before = products.clone();
        let _ = use_case().sort_products(&products, "Name (ascending)").unwrap();
        assert_eq!(products, before);
    }

    #[test]
    fn sort_and_paginate_serves_requested_page() {
        let result = use_case()
            .sort_and_paginate(&numbered_products(10), "Price (descending)", PaginationOptions::new(2, 3))
            .unwrap();
        assert_eq!(ids(&result.items), vec![7, 6, 5]);
        assert_eq!(result.total_pages, 4);
        assert!(result.has_next);
        assert!(result.has_prev);
    }

    #[test]
    fn sort_and_paginate_uses_configured_default_page_size() {
        let sorter = use_case();
        sorter.set_config(Some(Arc::new(SorterConfig {
            default_page_size: 4,
            ..SorterConfig::default()
        })));

        let result = sorter
            .sort_and_paginate(&numbered_products(10), "Price (ascending)", PaginationOptions::new(1, 0))
            .unwrap();
        assert_eq!(result.page_size, 4);
        assert_eq!(ids(&result.items), vec![1, 2, 3, 4]);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn sort_and_paginate_without_config_falls_back_to_ten() {
        let sorter = use_case();
        sorter.set_config(None);
        let result = sorter
            .sort_and_paginate(&numbered_products(25), "Price (ascending)", PaginationOptions::new(1, -3))
            .unwrap();
        assert_eq!(result.page_size, 10);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn sort_and_paginate_propagates_disabled() {
        let sorter = use_case();
        sorter.set_config(Some(Arc::new(SorterConfig::with_disabled(["Name (ascending)"]))));
        let err = sorter
            .sort_and_paginate(&sample_products(), "Name (ascending)", PaginationOptions::default())
            .unwrap_err();
        assert!(matches!(err, SortError::Disabled(_)));
    }
}
