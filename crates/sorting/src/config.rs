//! Enable policy supplied from outside the sorting core.

use serde::{Deserialize, Serialize};

/// Page size used whenever a caller or a configuration supplies none.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which sorters are switched off, plus the page size to fall back on.
///
/// Plain data: the use case holds it as an immutable snapshot and only ever
/// replaces it as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
    pub disabled_sorters: Vec<String>,
    pub default_page_size: usize,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            disabled_sorters: Vec::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SorterConfig {
    /// Default configuration with the given sorter names disabled.
    pub fn with_disabled<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disabled_sorters: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Exact, case-sensitive membership test against the disabled list.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_sorters.iter().any(|disabled| disabled == name)
    }

    /// `default_page_size`, or [`DEFAULT_PAGE_SIZE`] when it is zero.
    pub fn page_size(&self) -> usize {
        if self.default_page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.default_page_size
        }
    }
}
