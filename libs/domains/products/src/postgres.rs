use async_trait::async_trait;
use chrono::Utc;
use domain_categories::{Category, entity as category};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    entity::{product, variant},
    error::{ProductError, ProductResult},
    models::{Product, ProductsFilter, Variant},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads categories and variants for a page of products, two queries in total.
    async fn hydrate(&self, models: Vec<product::Model>) -> ProductResult<Vec<Product>> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let category_ids: Vec<Uuid> = models.iter().filter_map(|m| m.category_id).collect();
        let mut categories: HashMap<Uuid, Category> = HashMap::new();
        if !category_ids.is_empty() {
            categories = category::Entity::find()
                .filter(category::Column::Id.is_in(category_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| (m.id, m.into()))
                .collect();
        }

        let product_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut variants: HashMap<Uuid, Vec<Variant>> = HashMap::new();
        for model in variant::Entity::find()
            .filter(variant::Column::ProductId.is_in(product_ids))
            .order_by_asc(variant::Column::Id)
            .all(&self.db)
            .await?
        {
            variants
                .entry(model.product_id)
                .or_default()
                .push(model.into());
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let category = model
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                let variants = variants.remove(&model.id).unwrap_or_default();
                into_product(model, category, variants)
            })
            .collect())
    }
}

fn into_product(model: product::Model, category: Option<Category>, variants: Vec<Variant>) -> Product {
    Product {
        id: model.id,
        code: model.code,
        price: model.price,
        category_id: model.category_id,
        category,
        variants,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

/// Products matching the filter's category and price criteria, unordered and unpaged.
fn products_query(filter: &ProductsFilter) -> Select<product::Entity> {
    let mut query = product::Entity::find();

    if let Some(code) = &filter.category_code {
        query = query
            .inner_join(category::Entity)
            .filter(category::Column::Code.eq(code.as_str()));
    }
    if let Some(max_price) = filter.max_price {
        query = query.filter(product::Column::Price.lte(max_price));
    }

    query
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, filter: ProductsFilter) -> ProductResult<(Vec<Product>, u64)> {
        let total = products_query(&filter).count(&self.db).await?;

        let models = products_query(&filter)
            .order_by_asc(product::Column::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&self.db)
            .await?;

        tracing::debug!(total, page = models.len(), "Listed products");
        Ok((self.hydrate(models).await?, total))
    }

    async fn get_by_code(&self, code: &str) -> ProductResult<Product> {
        let model = product::Entity::find()
            .filter(product::Column::Code.eq(code))
            .one(&self.db)
            .await?
            .ok_or_else(|| ProductError::NotFound(code.to_string()))?;

        self.hydrate(vec![model])
            .await?
            .pop()
            .ok_or_else(|| ProductError::NotFound(code.to_string()))
    }
}
