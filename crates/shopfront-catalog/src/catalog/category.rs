//! Category labels for product grouping.
//!
//! Categories are free-text tags rather than a closed set, so a label is an
//! opaque string compared by exact equality.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-text grouping tag attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    /// Create a new label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label with each word capitalized, for pills and sidebar entries.
    pub fn display_name(&self) -> String {
        self.0
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CategoryLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CategoryLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of products carrying a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The label.
    pub label: CategoryLabel,
    /// Products with this label.
    pub count: usize,
}

/// Distinct categories, in order of first appearance.
pub fn distinct_categories<'a, I>(products: I) -> Vec<CategoryLabel>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut seen: Vec<CategoryLabel> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Distinct categories with product counts, in order of first appearance.
pub fn category_counts<'a, I>(products: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut counts: Vec<CategoryCount> = Vec::new();
    for product in products {
        match counts.iter_mut().find(|c| c.label == product.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                label: product.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: u32, category: &str) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Item {}", id),
            Money::new(1000, Currency::USD),
            category,
        )
    }

    #[test]
    fn test_display_name() {
        assert_eq!(CategoryLabel::new("electronics").display_name(), "Electronics");
        assert_eq!(CategoryLabel::new("home office").display_name(), "Home Office");
        assert_eq!(CategoryLabel::new("").display_name(), "");
    }

    #[test]
    fn test_labels_compare_exactly() {
        assert_ne!(CategoryLabel::new("Kitchen"), CategoryLabel::new("kitchen"));
        assert_eq!(CategoryLabel::from("home"), CategoryLabel::new("home".to_string()));
    }

    #[test]
    fn test_distinct_categories_first_occurrence() {
        let products = vec![
            product(1, "electronics"),
            product(2, "furniture"),
            product(3, "electronics"),
            product(4, "clothing"),
            product(5, "furniture"),
        ];
        let labels = distinct_categories(&products);
        let names: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["electronics", "furniture", "clothing"]);
    }

    #[test]
    fn test_distinct_categories_empty() {
        assert!(distinct_categories(&Vec::<Product>::new()).is_empty());
    }

    #[test]
    fn test_category_counts() {
        let products = vec![product(1, "home"), product(2, "kitchen"), product(3, "home")];
        let counts = category_counts(&products);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].label.as_str(), "home");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].count, 1);
    }
}
