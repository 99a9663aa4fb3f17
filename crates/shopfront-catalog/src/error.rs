//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when building or interpreting catalog data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A product record violates a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: u32, reason: String },

    /// Unknown sort option name.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Rating outside the 1-5 star scale.
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// Price range with min above max.
    #[error("Invalid price range: {min} > {max}")]
    InvalidPriceRange { min: String, max: String },
}
