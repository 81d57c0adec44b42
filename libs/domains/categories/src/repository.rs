use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{CategoriesFilter, Category, CreateCategory};

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category. A duplicate code is a store error.
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// One page of categories ordered by id, plus the unpaginated total.
    async fn list(&self, filter: CategoriesFilter) -> CategoryResult<(Vec<Category>, u64)>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<Uuid, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, e.g. with fixtures.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(
                categories.into_iter().map(|c| (c.id, c)).collect(),
            )),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        if categories.values().any(|c| c.code == input.code) {
            return Err(CategoryError::Database(format!(
                "duplicate key value violates unique constraint: code '{}' already exists",
                input.code
            )));
        }

        let category = Category::new(input);
        categories.insert(category.id, category.clone());

        tracing::info!(category_id = %category.id, code = %category.code, "Created category");
        Ok(category)
    }

    async fn list(&self, filter: CategoriesFilter) -> CategoryResult<(Vec<Category>, u64)> {
        let categories = self.categories.read().await;

        let page = categories
            .values()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect();

        Ok((page, categories.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(code: &str) -> CreateCategory {
        CreateCategory {
            code: code.to_string(),
            name: code.to_lowercase(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let repo = InMemoryCategoryRepository::new();
        let created = repo.create(input("SHOES")).await.unwrap();

        let (page, total) = repo
            .list(CategoriesFilter { offset: 0, limit: 10 })
            .await
            .unwrap();

        assert_eq!(total, 1);
        assert_eq!(page, vec![created]);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_store_error() {
        let repo = InMemoryCategoryRepository::new();
        repo.create(input("SHOES")).await.unwrap();

        let err = repo.create(input("SHOES")).await.unwrap_err();
        assert!(matches!(err, CategoryError::Database(_)));
    }

    #[tokio::test]
    async fn test_pagination_keeps_total_and_creation_order() {
        let repo = InMemoryCategoryRepository::new();
        for code in ["A", "B", "C", "D"] {
            repo.create(input(code)).await.unwrap();
        }

        let (page, total) = repo
            .list(CategoriesFilter { offset: 1, limit: 2 })
            .await
            .unwrap();

        assert_eq!(total, 4);
        let codes: Vec<_> = page.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["B", "C"]);
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let repo = InMemoryCategoryRepository::new();
        repo.create(input("A")).await.unwrap();

        let (page, total) = repo
            .list(CategoriesFilter { offset: 10, limit: 10 })
            .await
            .unwrap();

        assert!(page.is_empty());
        assert_eq!(total, 1);
    }
}
