//! Product source reading a JSON catalog file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shopfront_catalog::catalog::{CategoryLabel, Product};
use shopfront_catalog::ProductId;
use tracing::debug;

use crate::error::SourceError;
use crate::source::ProductSource;

/// Product source backed by a JSON array of product records.
///
/// The file is re-read on every call, so edits show up on the next mount.
/// Records use the storefront wire shape (`inStock`, decimal `price`) and are
/// validated as they are parsed.
#[derive(Debug, Clone)]
pub struct JsonProductSource {
    path: PathBuf,
}

impl JsonProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Product>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let products = parse_catalog(&content).map_err(|e| match e {
            CatalogParseError::Json(message) => SourceError::Parse {
                path: self.path.clone(),
                message,
            },
            CatalogParseError::DuplicateId(id) => SourceError::DuplicateId(id),
        })?;

        debug!(path = %self.path.display(), count = products.len(), "loaded catalog file");
        Ok(products)
    }
}

enum CatalogParseError {
    Json(String),
    DuplicateId(u32),
}

fn parse_catalog(content: &str) -> Result<Vec<Product>, CatalogParseError> {
    let products: Vec<Product> =
        serde_json::from_str(content).map_err(|e| CatalogParseError::Json(e.to_string()))?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        if !seen.insert(product.id) {
            return Err(CatalogParseError::DuplicateId(product.id.get()));
        }
    }
    Ok(products)
}

#[async_trait]
impl ProductSource for JsonProductSource {
    async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
        self.load().await
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, SourceError> {
        Ok(self.load().await?.into_iter().find(|p| p.id == id))
    }

    async fn list_products_by_category(
        &self,
        category: &CategoryLabel,
    ) -> Result<Vec<Product>, SourceError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|p| &p.category == category)
            .collect())
    }

    fn name(&self) -> &str {
        "json"
    }
}
