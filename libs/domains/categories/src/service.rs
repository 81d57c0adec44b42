use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{CategoriesFilter, CategoriesResponse, Category, CreateCategory};
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new category
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        filter: CategoriesFilter,
    ) -> CategoryResult<CategoriesResponse> {
        let (categories, total) = self.repository.list(filter).await?;
        Ok(CategoriesResponse { categories, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;

    fn shoes() -> Category {
        Category::new(CreateCategory {
            code: "SHOES".into(),
            name: "Shoes".into(),
        })
    }

    #[tokio::test]
    async fn test_create_category_stores_valid_input() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_create()
            .withf(|input| input.code == "SHOES" && input.name == "Shoes")
            .times(1)
            .returning(|input| Ok(Category::new(input)));

        let service = CategoryService::new(repo);
        let created = service
            .create_category(CreateCategory {
                code: "SHOES".into(),
                name: "Shoes".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.code, "SHOES");
    }

    #[tokio::test]
    async fn test_create_category_rejects_empty_name_without_touching_store() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_create().never();

        let service = CategoryService::new(repo);
        let err = service
            .create_category(CreateCategory {
                code: "SHOES".into(),
                name: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryError::Validation(_)));
        assert!(err.to_string().starts_with("Validation error: "));
    }

    #[tokio::test]
    async fn test_create_category_surfaces_store_error() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_create()
            .returning(|_| Err(CategoryError::Database("duplicate key".into())));

        let service = CategoryService::new(repo);
        let err = service
            .create_category(CreateCategory {
                code: "SHOES".into(),
                name: "Shoes".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "duplicate key");
    }

    #[tokio::test]
    async fn test_list_categories_passes_filter_and_total() {
        let filter = CategoriesFilter { offset: 2, limit: 1 };
        let category = shoes();
        let expected = category.clone();

        let mut repo = MockCategoryRepository::new();
        repo.expect_list()
            .with(eq(filter))
            .times(1)
            .returning(move |_| Ok((vec![category.clone()], 3)));

        let service = CategoryService::new(repo);
        let response = service.list_categories(filter).await.unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.categories, vec![expected]);
    }
}
