//! Listing filter types.

use crate::catalog::{CategoryLabel, Product};
use crate::error::CatalogError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inclusive bounds on a product's effective price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    /// Lower bound, if any.
    pub min: Option<Money>,
    /// Upper bound, if any.
    pub max: Option<Money>,
}

impl PriceRange {
    /// Create a range, rejecting min above max.
    pub fn new(min: Option<Money>, max: Option<Money>) -> Result<Self, CatalogError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo.amount_cents > hi.amount_cents {
                return Err(CatalogError::InvalidPriceRange {
                    min: lo.display(),
                    max: hi.display(),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Check whether an amount falls inside the range.
    ///
    /// Bounds compare on the minor-unit amount; currencies are assumed to
    /// match the catalog's.
    pub fn contains(&self, amount: &Money) -> bool {
        let above_min = self
            .min
            .map_or(true, |lo| amount.amount_cents >= lo.amount_cents);
        let below_max = self
            .max
            .map_or(true, |hi| amount.amount_cents <= hi.amount_cents);
        above_min && below_max
    }
}

/// A listing filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by a single category label (exact match).
    Category(CategoryLabel),
    /// Case-insensitive substring search in name/description.
    Text(String),
    /// Filter by effective price.
    PriceRange(PriceRange),
    /// Selected star ratings, each meaning "this many stars and up".
    /// Products qualify when they reach the lowest selected rating.
    Ratings(Vec<u8>),
    /// Only show in-stock items.
    InStock,
    /// Only show discounted items.
    OnSale,
}

impl Filter {
    /// Create a category filter.
    pub fn category(label: impl Into<CategoryLabel>) -> Self {
        Filter::Category(label.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a price range filter.
    pub fn price_range(range: PriceRange) -> Self {
        Filter::PriceRange(range)
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create an on-sale filter.
    pub fn on_sale() -> Self {
        Filter::OnSale
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(label) => &product.category == label,
            Filter::Text(query) => product.matches_text(query),
            Filter::PriceRange(range) => range.contains(&product.effective_price()),
            Filter::Ratings(selected) => match selected.iter().min() {
                Some(&lowest) => product.rating >= f64::from(lowest),
                None => true,
            },
            Filter::InStock => product.in_stock,
            Filter::OnSale => product.is_on_sale(),
        }
    }
}
