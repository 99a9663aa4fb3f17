//! Product records.

use crate::catalog::CategoryLabel;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Highest rating on the star scale.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Records are immutable once loaded; the listing only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// List price, before discount.
    pub price: Money,
    /// Discount in whole percent (0-100).
    pub discount: u8,
    /// Grouping label.
    pub category: CategoryLabel,
    /// Image URI.
    pub image: String,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    /// Whether the product can currently be shipped.
    pub in_stock: bool,
}

impl Product {
    /// Create an in-stock product with no discount, rating, or media.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<CategoryLabel>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            discount: 0,
            category: category.into(),
            image: String::new(),
            rating: 0.0,
            in_stock: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = percent;
        self
    }

    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = uri.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// List price reduced by the discount percentage.
    pub fn effective_price(&self) -> Money {
        let kept = 100 - u32::from(self.discount.min(100));
        self.price.percentage(f64::from(kept))
    }

    /// Amount saved relative to the list price.
    pub fn discount_amount(&self) -> Money {
        self.price
            .try_subtract(&self.effective_price())
            .unwrap_or_else(|| Money::zero(self.price.currency))
    }

    /// Check if the product carries a discount.
    pub fn is_on_sale(&self) -> bool {
        self.discount > 0
    }

    /// Whole stars for rating displays (rounded down).
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// An empty query matches every product.
    pub fn matches_text(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Check the catalog invariants for this record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidProduct {
            id: self.id.get(),
            reason: reason.to_string(),
        };

        if !self.id.is_valid() {
            return Err(invalid("id must be positive"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.price.is_negative() {
            return Err(invalid("price is negative"));
        }
        if self.discount > 100 {
            return Err(invalid("discount exceeds 100%"));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid("rating outside 0-5"));
        }
        Ok(())
    }
}

/// Wire shape of a product: decimal price and camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    discount: u8,
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    rating: f64,
    #[serde(default = "default_in_stock")]
    in_stock: bool,
    #[serde(default)]
    currency: Currency,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product = Product {
            id: ProductId::new(record.id),
            name: record.name,
            description: record.description,
            price: Money::from_decimal(record.price, record.currency),
            discount: record.discount,
            category: CategoryLabel::new(record.category),
            image: record.image,
            rating: record.rating,
            in_stock: record.in_stock,
        };
        product.validate()?;
        Ok(product)
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name,
            description: product.description,
            price: product.price.to_decimal(),
            discount: product.discount,
            category: product.category.as_str().to_string(),
            image: product.image,
            rating: product.rating,
            in_stock: product.in_stock,
            currency: product.price.currency,
        }
    }
}
