//! Listing query builder.

use crate::catalog::{CategoryLabel, Product};
use crate::error::CatalogError;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Source order.
    #[default]
    Featured,
    /// Sort by effective price, low to high.
    PriceAsc,
    /// Sort by effective price, high to low.
    PriceDesc,
    /// Highest id first; ids are assigned in catalog order.
    Newest,
    /// Highest rated first.
    Popularity,
}

impl SortOption {
    /// All options, in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Newest,
        SortOption::Popularity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Newest => "newest",
            SortOption::Popularity => "popularity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest First",
            SortOption::Popularity => "Popularity",
        }
    }

    /// Ordering between two products under this option.
    ///
    /// Ties compare equal so a stable sort keeps source order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceAsc => a
                .effective_price()
                .amount_cents
                .cmp(&b.effective_price().amount_cents),
            SortOption::PriceDesc => b
                .effective_price()
                .amount_cents
                .cmp(&a.effective_price().amount_cents),
            SortOption::Newest => b.id.cmp(&a.id),
            SortOption::Popularity => b.rating.total_cmp(&a.rating),
        }
    }
}

impl std::str::FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownSortOption(s.to_string()))
    }
}

/// A listing query: a conjunction of filters plus a sort order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListingQuery {
    /// Text query, if any.
    pub query: Option<String>,
    /// Filters to apply; a product must pass all of them.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
}

impl ListingQuery {
    /// Create an empty query that matches everything in source order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Empty text adds no filter.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Restrict to one category.
    pub fn with_category(mut self, label: CategoryLabel) -> Self {
        self.filters.push(Filter::Category(label));
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }

    /// Matching products, in source order.
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Matching products, ordered by the sort option.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched = self.filter(products);
        if self.sort != SortOption::Featured {
            matched.sort_by(|a, b| self.sort.compare(a, b));
        }
        matched
    }
}
