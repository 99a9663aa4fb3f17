//! Catalog types and listing logic for the Shopfront storefront.
//!
//! This crate provides the domain vocabulary shared by the data sources,
//! the listing controller, and the CLI:
//!
//! - **Catalog**: products, category labels, effective (discounted) pricing
//! - **Money**: minor-unit amounts with currency-aware formatting
//! - **Search**: listing filters, sort options, and the combined query
//!
//! # Example
//!
//! ```rust
//! use shopfront_catalog::prelude::*;
//!
//! let headphones = Product::new(
//!     ProductId::new(1),
//!     "Premium Wireless Headphones",
//!     Money::from_decimal(249.99, Currency::USD),
//!     "electronics",
//! )
//! .with_discount(15);
//!
//! assert_eq!(headphones.effective_price().display(), "$212.49");
//!
//! let query = ListingQuery::new()
//!     .with_category(CategoryLabel::new("electronics"))
//!     .with_query("WIRELESS");
//! assert!(query.matches(&headphones));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        category_counts, distinct_categories, CategoryCount, CategoryLabel, Product,
    };

    // Search
    pub use crate::search::{Filter, ListingQuery, PriceRange, SortOption};
}
