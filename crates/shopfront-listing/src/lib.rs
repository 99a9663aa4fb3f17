//! Product listing controller for the storefront.
//!
//! The [`ListingController`] owns every piece of interactive state on the
//! listing page (search text, active category, sort, view mode, sidebar
//! refinements, wishlist and cart marks) and derives what to show from it on
//! demand. Presentation code reads a [`ListingView`] snapshot and never
//! mutates anything.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shopfront_catalog::Currency;
//! use shopfront_data::MockProductSource;
//! use shopfront_listing::ListingController;
//!
//! # async fn run() {
//! let source = Arc::new(MockProductSource::sample(Currency::USD));
//! let mut listing = ListingController::mount(source);
//! listing.initialize();
//! listing.settle().await;
//!
//! listing.set_search_query("yoga");
//! assert_eq!(listing.filtered_products().len(), 1);
//! # }
//! ```

mod controller;
mod error;
mod lifecycle;
mod selection;
mod slider;
mod state;
mod view;

pub use controller::*;
pub use error::*;
pub use lifecycle::*;
pub use selection::*;
pub use slider::*;
pub use state::*;
pub use view::*;
