//! Presentation snapshots of the listing.
//!
//! Everything here is plain data computed from the controller's state.
//! Renderers consume it without reaching back into the controller.

use serde::Serialize;
use shopfront_catalog::catalog::{CategoryLabel, Product};
use shopfront_catalog::ProductId;

/// Skeleton cards shown while the load is in flight.
pub const LOADING_PLACEHOLDERS: usize = 6;

/// One product as a card or list row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTile {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Category label with words capitalized.
    pub category: String,
    /// Effective price, formatted.
    pub price: String,
    /// List price, formatted, when a discount applies.
    pub list_price: Option<String>,
    /// Badge text such as "15% OFF".
    pub badge: Option<String>,
    pub rating: f64,
    pub stars: u8,
    pub image: String,
    pub in_stock: bool,
    pub wishlisted: bool,
    pub in_cart: u32,
}

impl ProductTile {
    pub fn new(product: &Product, wishlisted: bool, in_cart: u32) -> Self {
        let on_sale = product.is_on_sale();
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.display_name(),
            price: product.effective_price().display(),
            list_price: on_sale.then(|| product.price.display()),
            badge: on_sale.then(|| format!("{}% OFF", product.discount)),
            rating: product.rating,
            stars: product.full_stars(),
            image: product.image.clone(),
            in_stock: product.in_stock,
            wishlisted,
            in_cart,
        }
    }
}

/// What the product area of the page should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingView {
    /// Load in flight: render skeleton cards.
    Loading { placeholders: usize },
    /// The load failed; products cannot be shown.
    Unavailable { reason: String },
    /// Nothing matched the current filters.
    Empty,
    /// Cards in a grid.
    Grid { items: Vec<ProductTile> },
    /// Rows with descriptions.
    List { items: Vec<ProductTile> },
}

impl ListingView {
    /// Tiles to render, if any.
    pub fn items(&self) -> &[ProductTile] {
        match self {
            ListingView::Grid { items } | ListingView::List { items } => items,
            _ => &[],
        }
    }
}

/// A category pill in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPill {
    /// `None` for the "All" pill.
    pub label: Option<CategoryLabel>,
    pub text: String,
    pub active: bool,
}

/// The "All" pill followed by one pill per category.
pub fn category_pills(categories: &[CategoryLabel], active: Option<&CategoryLabel>) -> Vec<CategoryPill> {
    let mut pills = Vec::with_capacity(categories.len() + 1);
    pills.push(CategoryPill {
        label: None,
        text: "All".to_string(),
        active: active.is_none(),
    });
    pills.extend(categories.iter().map(|label| CategoryPill {
        label: Some(label.clone()),
        text: label.display_name(),
        active: active == Some(label),
    }));
    pills
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::{Currency, Money};

    fn bag() -> Product {
        Product::new(
            ProductId::new(7),
            "Leather Messenger Bag",
            Money::from_decimal(149.99, Currency::USD),
            "accessories",
        )
        .with_discount(20)
        .with_rating(4.4)
    }

    #[test]
    fn test_tile_for_discounted_product() {
        let tile = ProductTile::new(&bag(), true, 2);
        assert_eq!(tile.price, "$119.99");
        assert_eq!(tile.list_price.as_deref(), Some("$149.99"));
        assert_eq!(tile.badge.as_deref(), Some("20% OFF"));
        assert_eq!(tile.category, "Accessories");
        assert_eq!(tile.stars, 4);
        assert!(tile.wishlisted);
        assert_eq!(tile.in_cart, 2);
    }

    #[test]
    fn test_tile_without_discount() {
        let tile = ProductTile::new(&bag().with_discount(0), false, 0);
        assert_eq!(tile.price, "$149.99");
        assert_eq!(tile.list_price, None);
        assert_eq!(tile.badge, None);
    }

    #[test]
    fn test_category_pills() {
        let categories = vec![CategoryLabel::new("home"), CategoryLabel::new("kitchen")];
        let pills = category_pills(&categories, None);
        assert_eq!(pills.len(), 3);
        assert!(pills[0].active);
        assert_eq!(pills[1].text, "Home");

        let kitchen = CategoryLabel::new("kitchen");
        let pills = category_pills(&categories, Some(&kitchen));
        assert!(!pills[0].active);
        assert!(pills[2].active);
    }

    #[test]
    fn test_view_items() {
        assert!(ListingView::Empty.items().is_empty());
        let view = ListingView::List {
            items: vec![ProductTile::new(&bag(), false, 0)],
        };
        assert_eq!(view.items().len(), 1);
    }
}
