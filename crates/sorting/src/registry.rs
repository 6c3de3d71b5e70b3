//! Name → sorter lookup shared between request handlers.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sorter::{SortDirection, Sorter};
use crate::strategies::{DateSorter, NameSorter, PriceSorter, SalesPerViewSorter};

/// Thread-safe registry of sorters keyed by [`Sorter::name`].
///
/// Names are case-sensitive. Registering an existing name replaces the prior
/// entry (last write wins).
pub trait SorterRegistry: Send + Sync {
    fn register(&self, sorter: Arc<dyn Sorter>);
    fn get(&self, name: &str) -> Option<Arc<dyn Sorter>>;
    /// Every registered sorter, in no particular order.
    fn all(&self) -> Vec<Arc<dyn Sorter>>;
    /// Returns `false` when nothing was registered under `name`.
    fn unregister(&self, name: &str) -> bool;
}

impl<S> SorterRegistry for Arc<S>
where
    S: SorterRegistry + ?Sized,
{
    fn register(&self, sorter: Arc<dyn Sorter>) {
        (**self).register(sorter)
    }

    fn get(&self, name: &str) -> Option<Arc<dyn Sorter>> {
        (**self).get(name)
    }

    fn all(&self) -> Vec<Arc<dyn Sorter>> {
        (**self).all()
    }

    fn unregister(&self, name: &str) -> bool {
        (**self).unregister(name)
    }
}

/// In-process registry guarded by a single reader/writer lock.
#[derive(Debug)]
pub struct InMemorySorterRegistry {
    inner: RwLock<HashMap<String, Arc<dyn Sorter>>>,
}

impl InMemorySorterRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Registry pre-populated with [`register_default_sorters`].
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        register_default_sorters(&registry);
        registry
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(map) => map.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySorterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SorterRegistry for InMemorySorterRegistry {
    fn register(&self, sorter: Arc<dyn Sorter>) {
        if let Ok(mut map) = self.inner.write() {
            let name = sorter.name().to_string();
            if map.insert(name.clone(), sorter).is_some() {
                tracing::debug!(sorter = %name, "replaced registered sorter");
            } else {
                tracing::debug!(sorter = %name, "registered sorter");
            }
        }
    }

    fn get(&self, name: &str) -> Option<Arc<dyn Sorter>> {
        let map = self.inner.read().ok()?;
        map.get(name).cloned()
    }

    fn all(&self) -> Vec<Arc<dyn Sorter>> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }

    fn unregister(&self, name: &str) -> bool {
        let removed = match self.inner.write() {
            Ok(mut map) => map.remove(name).is_some(),
            Err(_) => false,
        };
        if removed {
            tracing::debug!(sorter = %name, "unregistered sorter");
        }
        removed
    }
}

/// Install the eight built-in orderings: price, creation date, name and
/// sales-per-view, each ascending and descending.
pub fn register_default_sorters<R>(registry: &R)
where
    R: SorterRegistry + ?Sized,
{
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        registry.register(Arc::new(PriceSorter::new(direction)));
        registry.register(Arc::new(DateSorter::new(direction)));
        registry.register(Arc::new(NameSorter::new(direction)));
        registry.register(Arc::new(SalesPerViewSorter::new(direction)));
    }
}
