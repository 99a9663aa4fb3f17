//! Listing error types.

use shopfront_catalog::{CatalogError, ProductId};
use thiserror::Error;

/// Errors returned by listing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListingError {
    /// The id does not belong to a loaded product.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Slider bounds that leave no room for two handles.
    #[error("Invalid slider range [{min}, {max}] with step {step}")]
    InvalidSlider { min: i64, max: i64, step: i64 },

    /// A catalog-level validation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
