//! Per-item affordances: wishlist marks and cart quantities.

use std::collections::{BTreeMap, BTreeSet};

use shopfront_catalog::ProductId;

/// Wishlist and cart marks made from the listing.
///
/// Marks are keyed by product id and live only as long as the listing;
/// nothing here is persisted or checked out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    wishlist: BTreeSet<ProductId>,
    cart: BTreeMap<ProductId, u32>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the wishlist mark. Returns whether the product is now wishlisted.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        if self.wishlist.remove(&id) {
            false
        } else {
            self.wishlist.insert(id);
            true
        }
    }

    pub fn is_wishlisted(&self, id: ProductId) -> bool {
        self.wishlist.contains(&id)
    }

    /// Wishlisted ids in ascending order.
    pub fn wishlist(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.wishlist.iter().copied()
    }

    /// Add one unit to the cart. Returns the new quantity for the product.
    pub fn add_to_cart(&mut self, id: ProductId) -> u32 {
        let quantity = self.cart.entry(id).or_insert(0);
        *quantity = quantity.saturating_add(1);
        *quantity
    }

    pub fn cart_quantity(&self, id: ProductId) -> u32 {
        self.cart.get(&id).copied().unwrap_or(0)
    }

    /// Total units across the cart.
    pub fn cart_count(&self) -> u32 {
        self.cart.values().fold(0u32, |acc, q| acc.saturating_add(*q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_toggle() {
        let mut selections = Selections::new();
        let id = ProductId::new(3);
        assert!(selections.toggle_wishlist(id));
        assert!(selections.is_wishlisted(id));
        assert!(!selections.toggle_wishlist(id));
        assert!(!selections.is_wishlisted(id));
    }

    #[test]
    fn test_wishlist_iterates_in_id_order() {
        let mut selections = Selections::new();
        selections.toggle_wishlist(ProductId::new(9));
        selections.toggle_wishlist(ProductId::new(2));
        let ids: Vec<u32> = selections.wishlist().map(|id| id.get()).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn test_cart_quantities() {
        let mut selections = Selections::new();
        assert_eq!(selections.add_to_cart(ProductId::new(1)), 1);
        assert_eq!(selections.add_to_cart(ProductId::new(1)), 2);
        assert_eq!(selections.add_to_cart(ProductId::new(4)), 1);
        assert_eq!(selections.cart_quantity(ProductId::new(1)), 2);
        assert_eq!(selections.cart_quantity(ProductId::new(7)), 0);
        assert_eq!(selections.cart_count(), 3);
    }
}
