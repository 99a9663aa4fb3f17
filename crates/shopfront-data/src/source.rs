//! The asynchronous product catalog contract.

use async_trait::async_trait;
use shopfront_catalog::catalog::{CategoryLabel, Product};
use shopfront_catalog::ProductId;

use crate::error::SourceError;

/// Asynchronous provider of catalog products.
///
/// Implementations must be shareable across tasks; the listing spawns its
/// initial load onto the runtime.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Every product, in catalog order.
    async fn list_products(&self) -> Result<Vec<Product>, SourceError>;

    /// A single product, or `None` if the id is unknown.
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, SourceError>;

    /// Products carrying exactly this category label, in catalog order.
    async fn list_products_by_category(
        &self,
        category: &CategoryLabel,
    ) -> Result<Vec<Product>, SourceError>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "products"
    }
}
