//! Interactive state of the listing page.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use shopfront_catalog::catalog::{distinct_categories, CategoryLabel, Product};
use shopfront_catalog::search::{Filter, ListingQuery, PriceRange, SortOption};
use shopfront_catalog::{CatalogError, ProductId};

/// How the product set is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Sidebar refinements layered on top of category and search.
///
/// The default value filters nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Refinements {
    /// Bounds on effective price.
    pub price_range: Option<PriceRange>,
    /// Selected star ratings (1-5), each meaning "and up".
    pub ratings: BTreeSet<u8>,
    /// Hide out-of-stock products.
    pub in_stock_only: bool,
    /// Hide products without a discount.
    pub on_sale_only: bool,
}

impl Refinements {
    /// Flip a star rating selection. Returns whether it is now selected.
    pub fn toggle_rating(&mut self, rating: u8) -> Result<bool, CatalogError> {
        if !(1..=5).contains(&rating) {
            return Err(CatalogError::InvalidRating(rating));
        }
        if self.ratings.remove(&rating) {
            Ok(false)
        } else {
            self.ratings.insert(rating);
            Ok(true)
        }
    }

    /// Whether any refinement is active.
    pub fn is_active(&self) -> bool {
        *self != Refinements::default()
    }

    /// The refinements as listing filters.
    pub fn to_filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(range) = self.price_range {
            filters.push(Filter::price_range(range));
        }
        if !self.ratings.is_empty() {
            filters.push(Filter::Ratings(self.ratings.iter().copied().collect()));
        }
        if self.in_stock_only {
            filters.push(Filter::in_stock());
        }
        if self.on_sale_only {
            filters.push(Filter::on_sale());
        }
        filters
    }
}

/// Everything the listing page can change, owned by one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    /// Loaded products, in source order. Empty until a load succeeds.
    pub products: Vec<Product>,
    /// True from mount until the load settles.
    pub loading: bool,
    pub view_mode: ViewMode,
    pub filters_visible: bool,
    /// `None` means all categories.
    pub active_category: Option<CategoryLabel>,
    /// Raw search text; matched case-insensitively.
    pub search_query: String,
    pub sort: SortOption,
    pub refinements: Refinements,
}

impl ListingState {
    /// Fresh state for a newly mounted listing.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            view_mode: ViewMode::default(),
            filters_visible: false,
            active_category: None,
            search_query: String::new(),
            sort: SortOption::default(),
            refinements: Refinements::default(),
        }
    }

    /// Distinct categories across loaded products, in order of first appearance.
    pub fn categories(&self) -> Vec<CategoryLabel> {
        distinct_categories(&self.products)
    }

    /// The query the current selections describe.
    pub fn query(&self) -> ListingQuery {
        let mut query = ListingQuery::new()
            .with_query(self.search_query.as_str())
            .with_sort(self.sort);
        if let Some(label) = &self.active_category {
            query = query.with_category(label.clone());
        }
        for filter in self.refinements.to_filters() {
            query = query.with_filter(filter);
        }
        query
    }

    /// Products passing every active filter, in source order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.query().filter(&self.products)
    }

    /// Filtered products in the selected sort order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.query().apply(&self.products)
    }

    /// Look up a loaded product.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}
