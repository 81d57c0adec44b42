use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::CategoryResult,
    models::{CategoriesFilter, Category, CreateCategory},
    repository::CategoryRepository,
};

pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let active_model: entity::ActiveModel = Category::new(input).into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(category_id = %model.id, code = %model.code, "Created category");
        Ok(model.into())
    }

    async fn list(&self, filter: CategoriesFilter) -> CategoryResult<(Vec<Category>, u64)> {
        let total = entity::Entity::find().count(&self.db).await?;

        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }
}
