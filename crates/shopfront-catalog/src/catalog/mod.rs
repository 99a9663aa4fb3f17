//! Product catalog module.
//!
//! Contains the product record and category labels.

mod category;
mod product;

pub use category::{category_counts, distinct_categories, CategoryCount, CategoryLabel};
pub use product::Product;
