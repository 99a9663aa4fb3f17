//! In-memory product source with simulated latency.

use async_trait::async_trait;
use shopfront_catalog::catalog::{CategoryLabel, Product};
use shopfront_catalog::{Currency, ProductId};
use tracing::debug;

use crate::error::SourceError;
use crate::latency::{simulate, LatencyConfig};
use crate::sample::sample_products;
use crate::source::ProductSource;

/// Product source backed by a fixed in-memory catalog.
///
/// Every operation sleeps for its configured latency before settling, and a
/// source built with [`MockProductSource::failing`] rejects every call.
#[derive(Debug, Clone)]
pub struct MockProductSource {
    products: Vec<Product>,
    latency: LatencyConfig,
    failure: Option<String>,
}

impl MockProductSource {
    /// Source over an arbitrary catalog, with default latency.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: LatencyConfig::default(),
            failure: None,
        }
    }

    /// The twelve-item sample catalog.
    pub fn sample(currency: Currency) -> Self {
        Self::new(sample_products(currency))
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Make every operation fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    fn check_available(&self) -> Result<(), SourceError> {
        match &self.failure {
            Some(reason) => Err(SourceError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
        simulate(self.latency.list).await;
        self.check_available()?;
        debug!(count = self.products.len(), "listing mock catalog");
        Ok(self.products.clone())
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, SourceError> {
        simulate(self.latency.by_id).await;
        self.check_available()?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_products_by_category(
        &self,
        category: &CategoryLabel,
    ) -> Result<Vec<Product>, SourceError> {
        simulate(self.latency.by_category).await;
        self.check_available()?;
        Ok(self
            .products
            .iter()
            .filter(|p| &p.category == category)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
