//! Search module.
//!
//! Contains the listing filters, sort options, and the query that combines
//! them.

mod filter;
mod query;

pub use filter::{Filter, PriceRange};
pub use query::{ListingQuery, SortOption};
