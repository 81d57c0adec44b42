use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductsFilter, ProductsResponse};
use crate::repository::ProductRepository;

/// Service layer for the product catalog
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductsFilter) -> ProductResult<ProductsResponse> {
        let (products, total) = self.repository.list(filter).await?;
        Ok(ProductsResponse { products, total })
    }

    /// Look up a single product by its exact code
    #[instrument(skip(self))]
    pub async fn get_product_by_code(&self, code: &str) -> ProductResult<Product> {
        if code.is_empty() {
            return Err(ProductError::CodeRequired);
        }
        self.repository.get_by_code(code).await
    }
}
