use thiserror::Error;

/// Why a named sort could not run.
///
/// Both variants are terminal for the call: no partial result is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Nothing is registered under the requested name.
    #[error("sorter not found: {0}")]
    NotFound(String),

    /// The sorter exists but the active configuration disables it.
    #[error("sorter is disabled: {0}")]
    Disabled(String),
}

impl SortError {
    /// Name of the sorter the failed call asked for.
    pub fn sorter_name(&self) -> &str {
        match self {
            SortError::NotFound(name) | SortError::Disabled(name) => name,
        }
    }
}
