use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductsFilter};

/// Read access to the catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of matching products ordered by id, plus the count of all matches.
    async fn list(&self, filter: ProductsFilter) -> ProductResult<(Vec<Product>, u64)>;

    /// Exact match on code, or [`ProductError::NotFound`].
    async fn get_by_code(&self, code: &str) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(
                products.into_iter().map(|p| (p.id, p)).collect(),
            )),
        }
    }
}

fn matches(product: &Product, filter: &ProductsFilter) -> bool {
    let category_ok = filter.category_code.as_deref().is_none_or(|code| {
        product
            .category
            .as_ref()
            .is_some_and(|category| category.code == code)
    });
    let price_ok = filter.max_price.is_none_or(|max| product.price <= max);
    category_ok && price_ok
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, filter: ProductsFilter) -> ProductResult<(Vec<Product>, u64)> {
        let products = self.products.read().await;

        let matching: Vec<&Product> = products.values().filter(|p| matches(p, &filter)).collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn get_by_code(&self, code: &str) -> ProductResult<Product> {
        let products = self.products.read().await;
        products
            .values()
            .find(|p| p.code == code)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_categories::{Category, CreateCategory};
    use rust_decimal::Decimal;

    fn product(code: &str, cents: i64, category: Option<&Category>) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::now_v7(),
            code: code.to_string(),
            price: Decimal::new(cents, 2),
            category_id: category.map(|c| c.id),
            category: category.cloned(),
            variants: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn fixture() -> InMemoryProductRepository {
        let shoes = Category::new(CreateCategory {
            code: "SHOES".into(),
            name: "Shoes".into(),
        });
        InMemoryProductRepository::with_products([
            product("PROD001", 1099, None),
            product("PROD002", 1249, Some(&shoes)),
            product("PROD003", 2050, Some(&shoes)),
        ])
    }

    fn filter() -> ProductsFilter {
        ProductsFilter {
            limit: 10,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_category_filter_is_exact() {
        let repo = fixture();

        let (page, total) = repo
            .list(ProductsFilter {
                category_code: Some("SHOES".into()),
                ..filter()
            })
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert!(page.iter().all(|p| p.category.as_ref().unwrap().code == "SHOES"));

        let (_, total) = repo
            .list(ProductsFilter {
                category_code: Some("shoes".into()),
                ..filter()
            })
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_price_bound_is_inclusive() {
        let repo = fixture();

        let (page, total) = repo
            .list(ProductsFilter {
                max_price: Some(Decimal::new(1249, 2)),
                ..filter()
            })
            .await
            .unwrap();

        assert_eq!(total, 2);
        let codes: Vec<_> = page.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["PROD001", "PROD002"]);
    }

    #[tokio::test]
    async fn test_total_ignores_pagination() {
        let repo = fixture();

        let (page, total) = repo
            .list(ProductsFilter {
                offset: 1,
                limit: 1,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].code, "PROD002");
    }

    #[tokio::test]
    async fn test_get_by_code() {
        let repo = fixture();

        assert_eq!(repo.get_by_code("PROD003").await.unwrap().code, "PROD003");
        assert!(matches!(
            repo.get_by_code("PROD999").await,
            Err(ProductError::NotFound(code)) if code == "PROD999"
        ));
    }
}
