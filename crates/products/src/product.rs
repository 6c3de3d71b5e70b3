use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfsort_core::{DomainError, DomainResult, ProductId, ValueObject};

/// Calendar format used for creation dates (`2019-01-04`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a creation date in [`DATE_FORMAT`].
pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::validation(format!("invalid date {value:?}: {e}")))
}

/// Catalog product.
///
/// Treated as a value object: read paths hand out clones, nothing in the
/// workspace mutates a product after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    created: NaiveDate,
    sales_count: u64,
    views_count: u64,
}

impl ValueObject for Product {}

impl Product {
    /// Build a product, rejecting a negative or non-finite price.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        created: NaiveDate,
        sales_count: u64,
        views_count: u64,
    ) -> DomainResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number, got {price}"
            )));
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
            created,
            sales_count,
            views_count,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn created(&self) -> NaiveDate {
        self.created
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    pub fn views_count(&self) -> u64 {
        self.views_count
    }

    /// Sales divided by views; `0.0` for a product nobody has viewed.
    pub fn sales_per_view(&self) -> f64 {
        if self.views_count == 0 {
            return 0.0;
        }
        self.sales_count as f64 / self.views_count as f64
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: ${:.2}, Created: {}, Sales/View: {:.6}",
            self.id,
            self.name,
            self.price,
            self.created.format(DATE_FORMAT),
            self.sales_per_view()
        )
    }
}
